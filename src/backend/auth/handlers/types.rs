/**
 * Authentication Handler Types
 *
 * Request and response types used by the signup and login handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::validation::{is_valid_email, require_non_empty, Validate};
use crate::shared::{Role, SharedError};

/// Sign up request
///
/// `role` defaults to `normal` when omitted.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Plain text; hashed before storage
    pub password: String,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name)?;
        if !is_valid_email(&self.email) {
            return Err(SharedError::validation("email", "value is not a valid email address"));
        }
        require_non_empty("password", &self.password)
    }
}

/// Login form
///
/// Sent as `application/x-www-form-urlencoded`. `username` carries the email.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Access token issued by a successful login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
///
/// Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
