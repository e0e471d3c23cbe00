//! Request extractors and route guards.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), which validates the bearer token
//! - [`role`]: role checks as route layers and plain helpers
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::check_any_role;
//!
//! async fn handler(auth_user: AuthUser) -> Result<impl IntoResponse, AppError> {
//!     check_any_role(&auth_user, &[UserRole::Admin])?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
