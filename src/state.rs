use std::sync::Arc;

use sqlx::PgPool;

use gatekeeper_auth::{CredentialVerifier, JwtTokenIssuer, TokenIssuer};
use gatekeeper_config::{CorsConfig, JwtConfig};

use crate::modules::auth::service::AuthService;
use crate::modules::auth::verifier::PgCredentialVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the default collaborators: a Postgres-backed credential check and JWT issuance.
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        let verifier = Arc::new(PgCredentialVerifier::new(db.clone()));
        let issuer = Arc::new(JwtTokenIssuer::new(jwt_config.clone()));
        Self::with_capabilities(db, jwt_config, cors_config, verifier, issuer)
    }

    /// Builds the state around caller-supplied collaborators.
    ///
    /// `jwt_config` is still used by the request extractor to verify incoming
    /// bearer tokens, so a custom issuer must sign with the same secret.
    pub fn with_capabilities(
        db: PgPool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        verifier: Arc<dyn CredentialVerifier>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(db, verifier, issuer));
        Self {
            jwt_config,
            cors_config,
            auth_service,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = gatekeeper_db::init_db_pool().await?;
    gatekeeper_db::run_migrations(&db).await?;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        tracing::warn!("Tokens are signed with the development secret; set JWT_SECRET in production");
    }

    Ok(AppState::new(db, jwt_config, CorsConfig::from_env()))
}
