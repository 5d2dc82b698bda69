//! Event Management - Main Library
//!
//! A small HTTP API for publishing scheduled events. Anyone can browse
//! events; only admins can create, replace or delete them.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Roles, validation helpers, configuration
//!   - Shared error type
//!
//! - **`backend`** - Axum server over SQLite
//!   - bcrypt password hashing, JWT access tokens, role checks
//!   - User and event persistence
//!   - Route handlers and JSON error rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use eventhub::backend::server::init::create_app;
//! use eventhub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
