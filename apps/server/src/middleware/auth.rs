//! Authentication middleware.

use std::sync::Arc;

use auth::Claims;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use consult_store::ConsultStore;
use entities::Role;
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;

/// Authenticated user information.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// Role, consumed by the per-action authorization gates.
    pub role: Role,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = auth::AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Extracts the JWT token from the Authorization header.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Authentication middleware.
///
/// Extracts the bearer token from the Authorization header, validates it,
/// and stores the authenticated user in the request extensions. Role checks
/// happen per action in the handlers; this layer only establishes identity.
pub async fn auth_middleware<S: ConsultStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_token(&request) {
        Some(token) => token,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": {
                    "code": api_protocol::error_codes::AUTHENTICATION_REQUIRED,
                    "message": "Missing authorization header",
                }})),
            )
                .into_response()
        }
    };

    let claims = match state.jwt_manager.validate_token(token) {
        Ok(claims) => claims,
        Err(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": {
                    "code": api_protocol::error_codes::AUTHENTICATION_REQUIRED,
                    "message": "Invalid token",
                }})),
            )
                .into_response()
        }
    };

    match AuthenticatedUser::try_from(claims) {
        Ok(user) => {
            request.extensions_mut().insert(user);
        }
        Err(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": {
                    "code": api_protocol::error_codes::AUTHENTICATION_REQUIRED,
                    "message": "Invalid token claims",
                }})),
            )
                .into_response()
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(
            user_id,
            "test@example.com".to_string(),
            Some("Test User".to_string()),
            Role::Admin,
            24,
        );

        let user = AuthenticatedUser::try_from(claims).unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_extract_token_missing_bearer() {
        let auth_header = "Basic credentials";
        let token = auth_header.strip_prefix("Bearer ");
        assert_eq!(token, None);
    }
}
