//! JWT signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HMAC secret used to sign and verify tokens
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds (default: 3600)

use std::env;

const DEV_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_ACCESS_EXPIRY: i64 = 3600; // 1 hour

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
            DEV_SECRET.to_string()
        });

        Self {
            secret,
            access_token_expiry: parse_expiry(env::var("JWT_ACCESS_EXPIRY").ok().as_deref()),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

/// Token lifetime in seconds. Unset, unparsable and non-positive values
/// fall back to the default.
fn parse_expiry(raw: Option<&str>) -> i64 {
    match raw.map(|v| v.trim().parse::<i64>()) {
        None => DEFAULT_ACCESS_EXPIRY,
        Some(Ok(secs)) if secs > 0 => secs,
        Some(_) => {
            tracing::warn!(
                value = raw.unwrap_or_default(),
                "JWT_ACCESS_EXPIRY must be a positive number of seconds, using default"
            );
            DEFAULT_ACCESS_EXPIRY
        }
    }
}
