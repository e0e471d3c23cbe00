//! Role-based authorization for Axum.
//!
//! [`require_admin`] and [`require_manager`] are route layers built on
//! [`require_roles`]; [`check_any_role`] is the underlying check.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use gatekeeper_core::AppError;
use gatekeeper_models::UserRole;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Runs `next` only when the bearer token carries one of `allowed_roles`.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer for admin-only routes.
///
/// ```rust,ignore
/// Router::new()
///     .route("/", post(create_permission))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Layer for routes open to managers and admins.
pub async fn require_manager(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        &[UserRole::Admin, UserRole::Manager],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles, user_role
        )));
    }

    Ok(())
}
