/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server. Every
 * handler returns `Result<_, BackendError>`, and every variant maps to
 * exactly one HTTP status code.
 *
 * # Error Categories
 *
 * ## Request errors
 *
 * - `Validation` - a payload broke a field constraint (422)
 * - `HandlerError` - a request-level problem with an explicit status, such as
 *   a body that is not JSON at all
 *
 * ## Domain errors
 *
 * - `Conflict` - the email address is already registered (400)
 * - `NotFound` - no record with the requested id (404)
 * - `Auth` - authentication or authorization failure (401 / 403)
 *
 * ## Infrastructure errors
 *
 * - `Database`, `Token`, `PasswordHash`, `Internal` - all 500; the
 *   underlying message is logged but never sent to the client
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Authentication and authorization failures
///
/// `Invalid`, `UserNotFound` and `InvalidCredentials` are 401 responses and
/// carry a `WWW-Authenticate: Bearer` challenge. `Forbidden` is a 403.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Token missing, malformed, wrongly signed or expired
    #[error("Could not validate credentials")]
    Invalid,

    /// Token is valid but its subject no longer exists
    #[error("Could not validate credentials")]
    UserNotFound,

    /// Login with an unknown email or a wrong password
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the required role
    #[error("Not enough permissions")]
    Forbidden,
}

impl AuthError {
    /// HTTP status for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use eventhub::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Event not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Field validation failure
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Uniqueness violation (duplicate email)
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Requested record does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Authentication / authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password could not be hashed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Anything else that is the server's fault
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Conflict` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Auth` - 401 Unauthorized or 403 Forbidden
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Auth(err) => err.status_code(),
            Self::Database(_)
            | Self::Token(_)
            | Self::PasswordHash(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side failures collapse to a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Conflict { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Auth(err) => err.to_string(),
            Self::Database(_)
            | Self::Token(_)
            | Self::PasswordHash(_)
            | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }

    /// Whether the response must carry `WWW-Authenticate: Bearer`
    pub fn is_bearer_challenge(&self) -> bool {
        matches!(self, Self::Auth(err) if err.status_code() == StatusCode::UNAUTHORIZED)
    }
}
