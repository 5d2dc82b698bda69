//! Shared Module
//!
//! Types that do not depend on the HTTP server: the role enumeration, field
//! validation helpers, shared error types and application configuration.
//! Everything here is plain data and can be used from tests or tooling
//! without starting a server.

/// Shared error types
pub mod error;

/// User roles
pub mod role;

/// Field validation helpers
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use role::Role;
pub use validation::{is_valid_email, Validate};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, MIN_BCRYPT_COST};
