//! Department management API endpoints.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use consult_store::ConsultStore;
use entities::Department;

use crate::api::{parse_id, require_admin};
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Creates a department. Admin only.
pub async fn create_department<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDepartmentRequest>,
) -> ServerResult<Json<CreateDepartmentResponse>> {
    require_admin(&caller)?;

    if request.name.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Department name is required".to_string(),
        ));
    }

    let department = Department::new(request.name.trim(), request.description);
    let department = state.store.create_department(department).await?;

    tracing::info!(department_id = %department.id, "Department created");

    Ok(Json(CreateDepartmentResponse {
        department: (&department).into(),
    }))
}

/// Lists departments. Any signed-in user; the request form needs it.
pub async fn list_departments<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(_request): Json<ListDepartmentsRequest>,
) -> ServerResult<Json<ListDepartmentsResponse>> {
    let departments = state.store.list_departments().await?;

    Ok(Json(ListDepartmentsResponse {
        departments: departments.iter().map(Into::into).collect(),
    }))
}

/// Gets a department by ID.
pub async fn get_department<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<GetDepartmentRequest>,
) -> ServerResult<Json<GetDepartmentResponse>> {
    let id = parse_id(&request.department_id, "department_id")?;
    let department = state
        .store
        .get_department(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Department not found".to_string()))?;

    Ok(Json(GetDepartmentResponse {
        department: (&department).into(),
    }))
}

/// Updates a department. Admin only.
pub async fn update_department<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateDepartmentRequest>,
) -> ServerResult<Json<UpdateDepartmentResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.department_id, "department_id")?;
    let mut department = state
        .store
        .get_department(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Department not found".to_string()))?;

    if let Some(name) = request.name {
        department.name = name;
    }
    if let Some(description) = request.description {
        department.description = description;
    }
    let department = state.store.update_department(department).await?;

    tracing::info!(department_id = %department.id, "Department updated");

    Ok(Json(UpdateDepartmentResponse {
        department: (&department).into(),
    }))
}

/// Deletes a department. Admin only.
///
/// Users and consultations referencing it keep their dangling id; they
/// are not reconciled.
pub async fn delete_department<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteDepartmentRequest>,
) -> ServerResult<Json<DeleteDepartmentResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.department_id, "department_id")?;
    state.store.delete_department(id).await?;

    tracing::info!(department_id = %id, "Department deleted");

    Ok(Json(DeleteDepartmentResponse {}))
}
