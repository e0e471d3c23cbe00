//! # Gatekeeper Models
//!
//! Domain models and DTOs for the Gatekeeper API.
//!
//! - [`users`]: users, the [`UserRole`] enum, registration input
//! - [`permissions`]: permission records and admin DTOs
//! - [`auth`]: login DTOs and the [`AuthDetail`] reporting row

pub mod auth;
pub mod permissions;
pub mod users;

pub use auth::{AuthDetail, LoginRequest, LoginResponse, MessageResponse};
pub use permissions::{AssignPermissionsRequest, CreatePermissionRequest, Permission};
pub use users::{ParseRoleError, RegisterRequest, UserCredentials, UserRole};
