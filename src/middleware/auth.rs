use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use gatekeeper_auth::{Claims, Principal, verify_token};
use gatekeeper_core::AppError;
use gatekeeper_models::UserRole;

use crate::state::AppState;

/// Extractor that validates the bearer token and exposes its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Result<UserRole, AppError> {
        self.0
            .role
            .parse::<UserRole>()
            .map_err(|e| AppError::unauthorized(e.to_string()))
    }

    pub fn principal(&self) -> Result<Principal, AppError> {
        Principal::try_from(&self.0)
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: &str) -> Result<&str, AppError> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = bearer_token(auth_header)?;
        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
