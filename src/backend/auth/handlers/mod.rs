//! Authentication Handlers Module
//!
//! HTTP handlers for the `/users` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - Credential exchange handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /users/signup - User registration
//! - **`login`** - POST /users/login - Form login, returns a bearer token
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email, role, password → User created → User returned
//! 2. **Login**: email + password form → Credentials verified → Token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → `CurrentUser` / `AdminUser`

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use types::{LoginForm, SignupRequest, TokenResponse, UserResponse};

pub use login::login;
pub use signup::signup;
