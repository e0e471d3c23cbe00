//! Authentication DTOs and the reporting projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::users::UserRole;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One (user, permission) pair, flattened for reporting.
///
/// A user holding N permissions produces N rows; users with no
/// permissions produce none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthDetail {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let dto = LoginRequest {
            email: "user@test.com".to_string(),
            password: "x".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto = LoginRequest {
            email: "user@test.com".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_auth_detail_serialize() {
        let detail = AuthDetail {
            email: "alice@test.com".to_string(),
            name: "alice".to_string(),
            role: UserRole::Manager,
            code: "reports:read".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["email"], "alice@test.com");
        assert_eq!(json["role"], "MANAGER");
        assert_eq!(json["code"], "reports:read");
    }
}
