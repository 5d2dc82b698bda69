//! Route Configuration Module
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - `/users` and `/events` route groups
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Route groups
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use eventhub::backend::routes::create_router;
//! use eventhub::backend::server::build_state;
//! use eventhub::shared::AppConfig;
//!
//! # async fn example() {
//! let state = build_state(&AppConfig::default()).await.unwrap();
//! let router = create_router(state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// Route groups
pub mod api_routes;

pub use router::create_router;
