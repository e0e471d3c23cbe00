//! # Gatekeeper Core
//!
//! Core types, errors, and utilities for the Gatekeeper API.
//!
//! - [`errors`]: The HTTP-facing [`AppError`] and the classified [`AuthError`]
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_core::{AppError, AuthError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let error: AppError = AuthError::InvalidCredentials.into();
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, AuthError};
pub use password::{hash_password, verify_password};
