//! Permission models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Permission {
    pub id: Uuid,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePermissionRequest {
    #[validate(length(min = 1, max = 255, message = "code must be 1-255 characters"))]
    #[schema(example = "reports:read")]
    pub code: String,
}

/// Codes to grant to a user. Unknown codes are skipped.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AssignPermissionsRequest {
    #[serde(default)]
    pub codes: Vec<String>,
}
