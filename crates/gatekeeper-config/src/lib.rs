//! # Gatekeeper Config
//!
//! Configuration types for the Gatekeeper API, loaded from environment variables.
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen addresses for the API and the metrics endpoint
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
