//! JWT creation and verification.
//!
//! Tokens are HS256-signed with [`JwtConfig::secret`] and expire after
//! [`JwtConfig::access_token_expiry`] seconds.
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_auth::{Principal, create_access_token, verify_token};
//! use gatekeeper_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&principal, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, principal.user_id.to_string());
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gatekeeper_config::JwtConfig;
use gatekeeper_core::AppError;

use crate::claims::Claims;
use crate::principal::Principal;

/// Signs an access token for `principal`.
///
/// Fails when the configured lifetime is not positive.
pub fn create_access_token(
    principal: &Principal,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let lifetime = usize::try_from(jwt_config.access_token_expiry)
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| {
            AppError::internal_error(format!(
                "Invalid access token lifetime: {}",
                jwt_config.access_token_expiry
            ))
        })?;

    let now = Utc::now().timestamp() as usize;
    let exp = now + lifetime;

    let claims = Claims {
        sub: principal.user_id.to_string(),
        email: principal.email.clone(),
        role: principal.role.as_str().to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Checks signature and expiry and returns the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
