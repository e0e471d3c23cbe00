//! Injectable authentication capabilities.
//!
//! The auth service never resolves its collaborators on its own. It receives
//! a [`CredentialVerifier`] (email + password to [`Principal`]) and a
//! [`TokenIssuer`] (principal to signed token) when it is constructed.

use async_trait::async_trait;

use gatekeeper_config::JwtConfig;
use gatekeeper_core::{AppError, AuthError};

use crate::jwt::create_access_token;
use crate::principal::Principal;

/// Verifies a submitted email/password pair.
///
/// Implementations must return [`AuthError::InvalidCredentials`] for both an
/// unknown email and a wrong password, without distinguishing the two.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<Principal, AuthError>;
}

/// Produces a signed, time-bound token for a principal.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, principal: &Principal) -> Result<String, AppError>;
}

/// [`TokenIssuer`] backed by HS256 JWTs.
#[derive(Clone, Debug)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, principal: &Principal) -> Result<String, AppError> {
        create_access_token(principal, &self.config)
    }
}
