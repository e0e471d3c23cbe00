//! # Gatekeeper Auth
//!
//! Authentication capabilities and JWT utilities for the Gatekeeper API.
//!
//! - [`claims`]: access token claims
//! - [`principal`]: the authenticated identity returned by a login
//! - [`jwt`]: token creation and verification
//! - [`capabilities`]: the [`CredentialVerifier`] and [`TokenIssuer`] seams
//!   injected into the auth service
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_auth::{JwtTokenIssuer, Principal, TokenIssuer, verify_token};
//! use gatekeeper_config::JwtConfig;
//!
//! let issuer = JwtTokenIssuer::new(JwtConfig::from_env());
//! let token = issuer.issue(&principal)?;
//! let claims = verify_token(&token, &JwtConfig::from_env())?;
//! ```

pub mod capabilities;
pub mod claims;
pub mod jwt;
pub mod principal;

pub use capabilities::{CredentialVerifier, JwtTokenIssuer, TokenIssuer};
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
pub use principal::Principal;
