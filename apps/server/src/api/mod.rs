//! API endpoints.

pub mod auth;
pub mod consultation;
pub mod department;
pub mod donation;
pub mod news;
pub mod user;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use consult_store::ConsultStore;
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Creates the router for endpoints that do not require a session.
pub fn public_router<S: ConsultStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Auth endpoints
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        // Public site content
        .route("/api/news/list", post(news::list_news))
        .route("/api/news/get", post(news::get_news))
        .route("/api/donation/submit", post(donation::submit_donation))
        .route("/api/testimonial/list", post(consultation::list_testimonials))
        // Health check
        .route("/health", get(health_check))
}

/// Creates the router for endpoints that require an authenticated session.
pub fn protected_router<S: ConsultStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Session
        .route("/api/auth/me", get(auth::get_current_user))
        // Consultation lifecycle
        .route("/api/consultation/create", post(consultation::create_consultation))
        .route("/api/consultation/list", post(consultation::list_consultations))
        .route("/api/consultation/get", post(consultation::get_consultation))
        .route("/api/consultation/assign", post(consultation::assign_consultant))
        .route("/api/consultation/accept", post(consultation::accept_consultation))
        .route("/api/consultation/send-message", post(consultation::send_message))
        .route("/api/consultation/complete", post(consultation::complete_consultation))
        .route(
            "/api/consultation/submit-testimonial",
            post(consultation::submit_testimonial),
        )
        .route("/api/consultation/pause", post(consultation::pause_consultation))
        .route("/api/consultation/summarize", post(consultation::summarize_chat))
        // User management
        .route("/api/user/create", post(user::create_user))
        .route("/api/user/list", post(user::list_users))
        .route("/api/user/get", post(user::get_user))
        .route("/api/user/update", post(user::update_user))
        .route("/api/user/delete", post(user::delete_user))
        // Department management
        .route("/api/department/create", post(department::create_department))
        .route("/api/department/list", post(department::list_departments))
        .route("/api/department/get", post(department::get_department))
        .route("/api/department/update", post(department::update_department))
        .route("/api/department/delete", post(department::delete_department))
        // Donations (admin view)
        .route("/api/donation/list", post(donation::list_donations))
        // News management
        .route("/api/news/create", post(news::create_news))
        .route("/api/news/update", post(news::update_news))
        .route("/api/news/delete", post(news::delete_news))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Parses a request-supplied id, mapping failure to a validation error.
pub(crate) fn parse_id(value: &str, field: &str) -> ServerResult<Uuid> {
    value
        .parse()
        .map_err(|_| ServerError::InvalidRequest(format!("Invalid {field}")))
}

/// Gate for admin-only endpoints.
pub(crate) fn require_admin(user: &AuthenticatedUser) -> ServerResult<()> {
    if user.role != entities::Role::Admin {
        return Err(ServerError::PermissionDenied(
            "This action requires an admin account".to_string(),
        ));
    }
    Ok(())
}
