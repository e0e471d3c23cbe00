//! # Gatekeeper CLI
//!
//! Administrative operations that bypass the HTTP API. The first ADMIN of a
//! fresh deployment is created here, since permission endpoints already
//! require one.
//!
//! ```ignore
//! use gatekeeper_cli::admin::{auth_service, create_admin, create_permission, grant_permissions};
//!
//! let service = auth_service(pool);
//! create_admin(&service, "root", "root@example.com", "password123").await?;
//! create_permission(&service, "reports:read").await?;
//! grant_permissions(&service, "root", &["reports:read".to_string()]).await?;
//! ```

pub mod admin;
