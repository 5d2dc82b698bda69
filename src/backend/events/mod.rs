//! Events Module
//!
//! Scheduled events: the stored record, its request shapes, persistence and
//! the HTTP handlers under `/events`.
//!
//! # Module Structure
//!
//! ```text
//! events/
//! ├── mod.rs          - Module exports
//! ├── model.rs        - Event, EventCreate/EventUpdate, Pagination
//! ├── db.rs           - SQLite CRUD
//! └── handlers/       - HTTP handlers
//!     ├── read.rs     - list / get
//!     └── write.rs    - create / update / delete (admin only)
//! ```

/// Event record and request shapes
pub mod model;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use model::{Event, EventCreate, EventInput, EventUpdate, Pagination};
