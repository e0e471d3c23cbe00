use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use gatekeeper_auth::{CredentialVerifier, Principal, TokenIssuer};
use gatekeeper_core::errors::is_unique_violation;
use gatekeeper_core::{AuthError, hash_password};
use gatekeeper_models::{AuthDetail, Permission, RegisterRequest, UserRole};

use crate::metrics::{
    track_login_failure, track_login_success, track_permission_created, track_permissions_granted,
    track_user_registered,
};

pub const REGISTERED: &str = "registered";
pub const DONE: &str = "done";

const AUTH_DETAILS_SQL: &str = "SELECT u.email, u.name, u.role, p.code
     FROM users u
     JOIN user_permissions up ON u.id = up.user_id
     JOIN permission p ON up.permission_id = p.id";

const AUTH_DETAILS_BY_ID_SQL: &str = "SELECT u.email, u.name, u.role, p.code
     FROM users u
     JOIN user_permissions up ON u.id = up.user_id
     JOIN permission p ON up.permission_id = p.id
     WHERE u.id = $1";

/// Result of a successful login: the signed token and the principal it was issued for.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub principal: Principal,
}

/// Registration, login, permission administration and reporting.
///
/// Credential checking and token signing are delegated to the injected
/// [`CredentialVerifier`] and [`TokenIssuer`].
pub struct AuthService {
    db: PgPool,
    verifier: Arc<dyn CredentialVerifier>,
    issuer: Arc<dyn TokenIssuer>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        db: PgPool,
        verifier: Arc<dyn CredentialVerifier>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            db,
            verifier,
            issuer,
        }
    }

    /// Stores a new user with a bcrypt-hashed password.
    ///
    /// The role string goes through [`UserRole::from_registration`]; anything
    /// unrecognised silently becomes `USER`. No duplicate-email pre-check is
    /// made, so a clash surfaces as the store's constraint error.
    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn register(&self, dto: RegisterRequest) -> Result<&'static str, AuthError> {
        let role = UserRole::from_registration(dto.role.as_deref().unwrap_or_default());
        let password_hash = hash_password(&dto.password)?;

        sqlx::query("INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4)")
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&password_hash)
            .bind(role)
            .execute(&self.db)
            .await?;

        info!(role = %role, "User registered");
        track_user_registered(role.as_str());

        Ok(REGISTERED)
    }

    /// Verifies credentials and issues a token for the resulting principal.
    ///
    /// Unknown email and wrong password both yield
    /// [`AuthError::InvalidCredentials`].
    #[instrument(skip(self, password))]
    pub async fn log_in(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let principal = match self.verifier.verify(email, password).await {
            Ok(principal) => principal,
            Err(AuthError::InvalidCredentials) => {
                warn!("Login rejected");
                track_login_failure();
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let token = self.issuer.issue(&principal)?;

        info!(user_id = %principal.user_id, role = %principal.role, "Login succeeded");
        track_login_success(principal.role.as_str());

        Ok(LoginOutcome { token, principal })
    }

    /// Creates a permission with a unique code.
    ///
    /// The existence check gives the common-case error; the unique constraint
    /// on `permission.code` catches a concurrent insert of the same code.
    #[instrument(skip(self))]
    pub async fn create_permission(&self, code: &str) -> Result<Permission, AuthError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM permission WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.db)
        .await?;

        if exists {
            return Err(AuthError::DuplicateCode(code.to_string()));
        }

        let permission = sqlx::query_as::<_, Permission>(
            "INSERT INTO permission (code) VALUES ($1) RETURNING id, code, created_at",
        )
        .bind(code)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::DuplicateCode(code.to_string())
            } else {
                AuthError::Database(e)
            }
        })?;

        info!(permission_id = %permission.id, "Permission created");
        track_permission_created();

        Ok(permission)
    }

    /// Grants the listed permission codes to the user named `user_name`.
    ///
    /// Codes that do not exist are skipped. Names are not unique, so the
    /// earliest-registered user with that name is the one updated.
    #[instrument(skip(self, codes), fields(codes = codes.len()))]
    pub async fn add_permission_to_user(
        &self,
        user_name: &str,
        codes: &[String],
    ) -> Result<&'static str, AuthError> {
        let user_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE name = $1 ORDER BY created_at, id LIMIT 1",
        )
        .bind(user_name)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AuthError::UserNotFound(user_name.to_string()))?;

        let found: Vec<(Uuid, String)> =
            sqlx::query_as("SELECT id, code FROM permission WHERE code = ANY($1)")
                .bind(codes)
                .fetch_all(&self.db)
                .await?;

        for code in codes {
            if !found.iter().any(|(_, c)| c == code) {
                debug!(code = %code, "Skipping unknown permission code");
            }
        }

        let permission_ids: Vec<Uuid> = found.into_iter().map(|(id, _)| id).collect();

        let mut tx = self.db.begin().await?;

        let granted = sqlx::query(
            "INSERT INTO user_permissions (user_id, permission_id)
             SELECT $1, UNNEST($2::uuid[])
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(&permission_ids)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("UPDATE users SET updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(user_id = %user_id, granted, "Permissions assigned");
        track_permissions_granted(granted);

        Ok(DONE)
    }

    /// One row per (user, permission) pair across all users. Unordered.
    #[instrument(skip(self))]
    pub async fn auth_details(&self) -> Result<Vec<AuthDetail>, AuthError> {
        let rows = sqlx::query_as::<_, AuthDetail>(AUTH_DETAILS_SQL)
            .fetch_all(&self.db)
            .await?;

        Ok(rows)
    }

    /// Same as [`auth_details`](Self::auth_details), restricted to one user id.
    ///
    /// A malformed id is [`AuthError::InvalidId`]; a well-formed unknown id
    /// returns an empty list.
    #[instrument(skip(self))]
    pub async fn auth_details_by_id(&self, id: &str) -> Result<Vec<AuthDetail>, AuthError> {
        let user_id = Uuid::parse_str(id).map_err(|_| AuthError::InvalidId(id.to_string()))?;

        let rows = sqlx::query_as::<_, AuthDetail>(AUTH_DETAILS_BY_ID_SQL)
            .bind(user_id)
            .fetch_all(&self.db)
            .await?;

        Ok(rows)
    }
}
