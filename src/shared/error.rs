//! Shared Error Types
//!
//! This module defines error types that are independent of the HTTP layer.
//! They describe problems with the *shape* of data: a field that breaks a
//! constraint or a role label that is not known.
//!
//! # Error Categories
//!
//! - `ValidationError` - Field-level constraint failures
//! - `UnknownRole` - A role label outside `normal` / `admin`
//!
//! # Usage
//!
//! ```rust
//! use eventhub::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Shared error types used by schemas and domain values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Role label that does not map to a known role
    #[error("Unknown role '{role}', expected 'normal' or 'admin'")]
    UnknownRole {
        /// The rejected label
        role: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-role error
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole { role: role.into() }
    }
}
