use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gatekeeper_auth::{CredentialVerifier, Principal};
use gatekeeper_core::{AuthError, verify_password};
use gatekeeper_models::UserCredentials;

/// Checks credentials against the `users` table.
#[derive(Clone, Debug)]
pub struct PgCredentialVerifier {
    db: PgPool,
}

impl PgCredentialVerifier {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialVerifier for PgCredentialVerifier {
    #[instrument(skip(self, password))]
    async fn verify(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let user = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal::new(user.id, user.email, user.role))
    }
}
