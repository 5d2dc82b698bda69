//! Field validation helpers
//!
//! Request schemas implement [`Validate`]; the backend runs it right after
//! deserialization, before any handler logic sees the payload.

use crate::shared::error::SharedError;

/// Longest address accepted by [`is_valid_email`] (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// A payload that can check its own field constraints
pub trait Validate {
    /// Returns the first violated constraint, if any
    fn validate(&self) -> Result<(), SharedError>;
}

/// Fails when `value` is empty or whitespace only
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Syntactic email check
///
/// Accepts `local@domain` where:
/// - the address has no whitespace and at most 254 characters
/// - there is exactly one `@`, with a non-empty local part
/// - the domain has at least two dot-separated labels, none empty, made of
///   ASCII alphanumerics and hyphens, not starting or ending with a hyphen
///
/// Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
