//! Application error types.
//!
//! Two layers of errors live here:
//!
//! - [`AuthError`]: the classified failures of the auth service
//!   (bad login, duplicate permission code, unknown user, malformed id)
//!   plus a passthrough for everything else.
//! - [`AppError`]: the HTTP-facing error carried by handlers. It pairs a
//!   status code with an [`anyhow::Error`] and renders as
//!   `{"error": "<message>"}`.
//!
//! Every [`AuthError`] converts into an [`AppError`], so handlers can use `?`
//! on service calls directly.

use std::fmt;

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow!(message))
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(message))
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::internal(err)
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::internal(err)
    }
}

/// Classified failures of the auth service.
///
/// The first four variants are caller faults and map to 4xx responses.
/// `Database` and `Internal` are unclassified and map to 500.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Both cases share one message.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Permission '{0}' already exists")]
    DuplicateCode(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Invalid id")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(AppError),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateCode(_) => StatusCode::CONFLICT,
            AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Internal(err) => err.status,
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(inner) => inner,
            AuthError::Database(db_err) => AppError::from(db_err),
            other => AppError::new(other.status(), anyhow!(other.to_string())),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Returns true when the error is a unique-constraint violation reported by the store.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_auth_error_status_mapping() {
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::DuplicateCode("read".to_string()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::UserNotFound("alice".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AuthError::InvalidId("nope".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_id_message_hides_input() {
        let err = AuthError::InvalidId("'; drop table users".to_string());
        assert_eq!(err.to_string(), "Invalid id");
    }

    #[test]
    fn test_internal_keeps_inner_status() {
        let err: AuthError = AppError::forbidden("nope".to_string()).into();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);

        let app_err: AppError = err.into();
        assert_eq!(app_err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_auth_error_into_app_error() {
        let app_err: AppError = AuthError::DuplicateCode("write".to_string()).into();
        assert_eq!(app_err.status, StatusCode::CONFLICT);
        assert_eq!(app_err.to_string(), "Permission 'write' already exists");
    }

    #[test]
    fn test_sqlx_error_is_internal() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AuthError::UserNotFound("bob".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "User 'bob' not found");
    }
}
