//! Backend Module
//!
//! All server-side code: an Axum HTTP API over SQLite for user accounts and
//! scheduled events.
//!
//! # Architecture
//!
//! - **`server`** - State construction, database setup, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Users, password hashing, access tokens, `/users` handlers
//! - **`events`** - Event model, persistence, `/events` handlers
//! - **`middleware`** - Access control and request extractors
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── events/         - Events
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the token service and the password
//! hasher. It is immutable and cloned per request; the database is the only
//! shared mutable state.
//!
//! # Error Handling
//!
//! Handlers return `BackendResult<T>`. Every `BackendError` renders as
//! `{"detail": ..., "status": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Scheduled events
pub mod events;

/// Middleware for request processing
pub mod middleware;

pub use error::{BackendError, BackendResult};
pub use server::create_app;
