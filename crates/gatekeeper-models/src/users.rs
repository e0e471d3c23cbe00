//! User domain models and DTOs.
//!
//! Users carry exactly one [`UserRole`]. The role is stored as the Postgres
//! enum `user_role` and travels in access tokens as its upper-case name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Authorization tier of a user.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Manager,
    Admin,
}

impl UserRole {
    /// Maps the free-form role field of a registration request.
    ///
    /// Only the exact lowercase strings `"admin"` and `"manager"` are
    /// recognised. Everything else, including `"Admin"` and the empty
    /// string, becomes [`UserRole::User`].
    pub fn from_registration(role: &str) -> Self {
        match role {
            "admin" => UserRole::Admin,
            "manager" => UserRole::Manager,
            _ => UserRole::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }

}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct ParseRoleError(pub String);

/// Strict parser for the canonical upper-case names found in tokens.
impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "MANAGER" => Ok(UserRole::Manager),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Row used by the credential check. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Self-service registration.
///
/// `role` is optional and mapped through [`UserRole::from_registration`],
/// so an unknown value silently registers a plain user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
    #[serde(default)]
    #[schema(example = "manager")]
    pub role: Option<String>,
}
