//! CLI operations, run through the same [`AuthService`] as the HTTP API.

use gatekeeper::modules::auth::service::AuthService;
use gatekeeper::state::AppState;
use gatekeeper_config::{CorsConfig, JwtConfig};
use gatekeeper_core::AuthError;
use gatekeeper_core::errors::is_unique_violation;
use gatekeeper_db::PgPool;
use gatekeeper_models::{Permission, RegisterRequest};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("User with email '{0}' already exists")]
    EmailTaken(String),
    #[error("Password must be at least 8 characters")]
    WeakPassword,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub fn auth_service(db: PgPool) -> std::sync::Arc<AuthService> {
    AppState::new(db, JwtConfig::from_env(), CorsConfig::from_env()).auth_service
}

/// Registers a user with the ADMIN role. Fails if the email is already registered.
pub async fn create_admin(
    service: &AuthService,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CliError::WeakPassword);
    }

    let dto = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Some("admin".to_string()),
    };

    match service.register(dto).await {
        Ok(_) => Ok(()),
        Err(AuthError::Database(e)) if is_unique_violation(&e) => {
            Err(CliError::EmailTaken(email.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn create_permission(service: &AuthService, code: &str) -> Result<Permission, CliError> {
    Ok(service.create_permission(code).await?)
}

/// Unknown codes and grants the user already holds are skipped.
pub async fn grant_permissions(
    service: &AuthService,
    name: &str,
    codes: &[String],
) -> Result<(), CliError> {
    service.add_permission_to_user(name, codes).await?;
    Ok(())
}
