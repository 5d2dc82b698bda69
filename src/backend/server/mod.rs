//! Server Module
//!
//! Everything needed to turn an `AppConfig` into a running Axum app.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and migrations
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use eventhub::backend::server::create_app;
//! use eventhub::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::from_env().unwrap();
//! let app = create_app(&config).await.unwrap();
//! # }
//! ```

/// Application state management
pub mod state;

/// Database connection and migrations
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_state, create_app};
pub use state::AppState;
