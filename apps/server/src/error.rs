//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Lifecycle engine rejected the action.
    #[error("{0}")]
    Transition(#[from] lifecycle::TransitionError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] consult_store::StoreError),

    /// Authentication error.
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                api_protocol::error_codes::INVALID_REQUEST,
                msg.clone(),
            ),
            ServerError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                api_protocol::error_codes::RESOURCE_NOT_FOUND,
                msg.clone(),
            ),
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                api_protocol::error_codes::AUTHENTICATION_REQUIRED,
                "Authentication required".to_string(),
            ),
            ServerError::PermissionDenied(msg) => (
                StatusCode::FORBIDDEN,
                api_protocol::error_codes::PERMISSION_DENIED,
                msg.clone(),
            ),
            ServerError::Transition(e) => match e {
                lifecycle::TransitionError::NotPermitted { .. } => (
                    StatusCode::FORBIDDEN,
                    api_protocol::error_codes::PERMISSION_DENIED,
                    e.to_string(),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    api_protocol::error_codes::INVALID_REQUEST,
                    e.to_string(),
                ),
            },
            ServerError::Store(e) => match e {
                consult_store::StoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    api_protocol::error_codes::RESOURCE_NOT_FOUND,
                    e.to_string(),
                ),
                consult_store::StoreError::AlreadyExists { .. } => (
                    StatusCode::BAD_REQUEST,
                    api_protocol::error_codes::INVALID_REQUEST,
                    e.to_string(),
                ),
                consult_store::StoreError::StaleState { .. } => (
                    StatusCode::CONFLICT,
                    api_protocol::error_codes::STALE_STATE,
                    e.to_string(),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    api_protocol::error_codes::INTERNAL_ERROR,
                    e.to_string(),
                ),
            },
            ServerError::Auth(e) => (
                StatusCode::UNAUTHORIZED,
                api_protocol::error_codes::AUTHENTICATION_REQUIRED,
                e.to_string(),
            ),
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                api_protocol::error_codes::INTERNAL_ERROR,
                msg.clone(),
            ),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
