//! Authentication API endpoints.
//!
//! Credential verification itself belongs to the external identity
//! provider; these endpoints exchange a verified identity for a session
//! token carrying the stored `{id, role}`.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use consult_store::ConsultStore;
use entities::User;

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Registers a new student account and opens a session.
pub async fn signup<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<SignupRequest>,
) -> ServerResult<Json<SignupResponse>> {
    if request.full_name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Name and email are required".to_string(),
        ));
    }

    if state
        .store
        .get_user_by_email(request.email.trim())
        .await?
        .is_some()
    {
        return Err(ServerError::InvalidRequest(
            "Email is already registered".to_string(),
        ));
    }

    // Self-signup always creates a student; staff roles come from an admin.
    let mut user = User::new(request.full_name.trim(), request.email.trim());
    if let Some(avatar_url) = request.avatar_url {
        user = user.with_avatar_url(avatar_url);
    }
    let user = state.store.create_user(user).await?;

    let token = state.jwt_manager.generate_token(
        user.id,
        user.email.clone(),
        Some(user.full_name.clone()),
        user.role,
    )?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok(Json(SignupResponse {
        token,
        user: (&user).into(),
    }))
}

/// Opens a session for an existing account.
pub async fn login<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<LoginResponse>> {
    let user = state
        .store
        .get_user_by_email(request.email.trim())
        .await?
        .ok_or_else(|| ServerError::NotFound("No account for this email".to_string()))?;

    if !user.active {
        return Err(ServerError::PermissionDenied(
            "This account has been deactivated".to_string(),
        ));
    }

    let token = state.jwt_manager.generate_token(
        user.id,
        user.email.clone(),
        Some(user.full_name.clone()),
        user.role,
    )?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: (&user).into(),
    }))
}

/// Gets the current authenticated user.
pub async fn get_current_user<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<GetCurrentUserResponse>> {
    let db_user = state
        .store
        .get_user(user.id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(GetCurrentUserResponse {
        user: (&db_user).into(),
    }))
}
