use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use gatekeeper_core::AppError;
use gatekeeper_models::{AssignPermissionsRequest, CreatePermissionRequest, MessageResponse, Permission};

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a permission
#[utoipa::path(
    post,
    path = "/api/permissions",
    request_body = CreatePermissionRequest,
    responses(
        (status = 201, description = "Permission created", body = Permission),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 409, description = "A permission with this code already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_permission(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePermissionRequest>,
) -> Result<(StatusCode, Json<Permission>), AppError> {
    let permission = state.auth_service.create_permission(&dto.code).await?;
    Ok((StatusCode::CREATED, Json(permission)))
}

/// Grant permissions to a user by name
///
/// Unknown codes are ignored.
#[utoipa::path(
    post,
    path = "/api/permissions/users/{name}",
    params(
        ("name" = String, Path, description = "User name")
    ),
    request_body = AssignPermissionsRequest,
    responses(
        (status = 200, description = "Permissions assigned", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn assign_permissions(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(dto): ValidatedJson<AssignPermissionsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state
        .auth_service
        .add_permission_to_user(&name, &dto.codes)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}
