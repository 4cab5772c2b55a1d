//! User management API endpoints. Admin only.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use chrono::Utc;
use consult_store::{ConsultStore, UserFilter};
use entities::{Role, User};

use crate::api::{parse_id, require_admin};
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Checks that a consultant's department exists.
async fn validate_department<S: ConsultStore>(
    state: &AppState<S>,
    role: Role,
    department_id: Option<uuid::Uuid>,
) -> ServerResult<()> {
    if role == Role::Consultant {
        let department_id = department_id.ok_or_else(|| {
            ServerError::InvalidRequest("A consultant needs a department".to_string())
        })?;
        state
            .store
            .get_department(department_id)
            .await?
            .ok_or_else(|| ServerError::NotFound("Department not found".to_string()))?;
    }
    Ok(())
}

/// Creates a user with any role.
pub async fn create_user<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<CreateUserRequest>,
) -> ServerResult<Json<CreateUserResponse>> {
    require_admin(&caller)?;

    if request.full_name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Name and email are required".to_string(),
        ));
    }

    let role: Role = request.role.into();
    let department_id = request
        .department_id
        .as_deref()
        .map(|id| parse_id(id, "department_id"))
        .transpose()?;
    validate_department(&state, role, department_id).await?;

    let mut user = User::new(request.full_name.trim(), request.email.trim()).with_role(role);
    if let Some(department_id) = department_id {
        user = user.with_department(department_id);
    }
    if let Some(avatar_url) = request.avatar_url {
        user = user.with_avatar_url(avatar_url);
    }
    let user = state.store.create_user(user).await?;

    tracing::info!(user_id = %user.id, role = ?user.role, "User created");

    Ok(Json(CreateUserResponse {
        user: (&user).into(),
    }))
}

/// Lists users, including the consultant-eligibility lookup used by the
/// assignment dialog (`role == consultant && department_id == X`).
pub async fn list_users<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<ListUsersRequest>,
) -> ServerResult<Json<ListUsersResponse>> {
    require_admin(&caller)?;

    let filter = UserFilter {
        role: request.role.map(Into::into),
        department_id: request
            .department_id
            .as_deref()
            .map(|id| parse_id(id, "department_id"))
            .transpose()?,
        active: request.active,
        limit: request.limit,
        offset: request.offset,
    };
    let (users, total_count) = state.store.list_users(filter).await?;

    Ok(Json(ListUsersResponse {
        users: users.iter().map(Into::into).collect(),
        total_count,
    }))
}

/// Gets a user by ID.
pub async fn get_user<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<GetUserRequest>,
) -> ServerResult<Json<GetUserResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.user_id, "user_id")?;
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(GetUserResponse {
        user: (&user).into(),
    }))
}

/// Updates a user's profile, role, or active flag.
pub async fn update_user<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateUserRequest>,
) -> ServerResult<Json<UpdateUserResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.user_id, "user_id")?;
    let mut user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    if let Some(full_name) = request.full_name {
        user.full_name = full_name;
    }
    if let Some(avatar_url) = request.avatar_url {
        user.avatar_url = Some(avatar_url);
    }
    if let Some(role) = request.role {
        user.role = role.into();
    }
    if let Some(department_id) = request.department_id.as_deref() {
        user.department_id = Some(parse_id(department_id, "department_id")?);
    }
    if let Some(active) = request.active {
        user.active = active;
    }
    validate_department(&state, user.role, user.department_id).await?;

    user.updated_at = Utc::now();
    let user = state.store.update_user(user).await?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(UpdateUserResponse {
        user: (&user).into(),
    }))
}

/// Deletes a user.
///
/// Consultations referencing this user keep their dangling id; they are
/// not reconciled.
pub async fn delete_user<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteUserRequest>,
) -> ServerResult<Json<DeleteUserResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.user_id, "user_id")?;
    if id == caller.id {
        return Err(ServerError::InvalidRequest(
            "You cannot delete your own account".to_string(),
        ));
    }
    state.store.delete_user(id).await?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(Json(DeleteUserResponse {}))
}
