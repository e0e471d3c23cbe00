use axum::Json;
use axum::extract::{Path, State};

use gatekeeper_core::AppError;
use gatekeeper_models::AuthDetail;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List every (user, permission) pair
#[utoipa::path(
    get,
    path = "/api/auth-details",
    responses(
        (status = 200, description = "Flattened user permissions", body = Vec<AuthDetail>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Reports",
    security(("bearer_auth" = []))
)]
pub async fn get_auth_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthDetail>>, AppError> {
    Ok(Json(state.auth_service.auth_details().await?))
}

/// List the permissions of one user
#[utoipa::path(
    get,
    path = "/api/auth-details/{id}",
    params(
        ("id" = String, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 200, description = "Flattened permissions of the user; empty for an unknown id", body = Vec<AuthDetail>),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Reports",
    security(("bearer_auth" = []))
)]
pub async fn get_auth_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AuthDetail>>, AppError> {
    Ok(Json(state.auth_service.auth_details_by_id(&id).await?))
}
