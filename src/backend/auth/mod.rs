//! Authentication Module
//!
//! User registration, credential checks and access tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing off the async runtime
//! ├── sessions.rs     - JWT issue / verify
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - Credential exchange handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access tokens are stateless HS256 JWTs carrying the user's email
//! - Tokens expire after `ACCESS_TOKEN_EXPIRE_MINUTES` and cannot be revoked
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginForm, SignupRequest, TokenResponse, UserResponse};
pub use handlers::{login, signup};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenService};
pub use users::User;
