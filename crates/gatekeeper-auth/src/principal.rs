use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use gatekeeper_core::AppError;
use gatekeeper_models::UserRole;

use crate::claims::Claims;

/// The authenticated identity produced by a successful credential check.
///
/// Returned to the caller of a login rather than stored in any ambient
/// context; callers thread it through whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl Principal {
    pub fn new(user_id: Uuid, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }
}

impl TryFrom<&Claims> for Principal {
    type Error = AppError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))?;
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|e| AppError::unauthorized(e.to_string()))?;

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "p@test.com".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1,
        }
    }

    #[test]
    fn test_principal_from_claims() {
        let id = Uuid::new_v4();
        let principal = Principal::try_from(&claims(&id.to_string(), "MANAGER")).unwrap();
        assert_eq!(principal.user_id, id);
        assert_eq!(principal.role, UserRole::Manager);
        assert_eq!(principal.email, "p@test.com");
    }

    #[test]
    fn test_principal_rejects_bad_subject() {
        assert!(Principal::try_from(&claims("not-a-uuid", "USER")).is_err());
    }

    #[test]
    fn test_principal_rejects_unknown_role() {
        let id = Uuid::new_v4().to_string();
        assert!(Principal::try_from(&claims(&id, "admin")).is_err());
    }
}
