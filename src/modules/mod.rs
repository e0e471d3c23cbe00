//! Feature modules.
//!
//! - [`auth`]: registration, login, and the [`AuthService`](auth::service::AuthService)
//! - [`permissions`]: permission creation and assignment (admin only)
//! - [`reports`]: flattened user/permission listings (admin and manager)

pub mod auth;
pub mod permissions;
pub mod reports;
