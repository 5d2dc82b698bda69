//! Event Handlers Module
//!
//! - **`read`** - GET /events, GET /events/{id} (public)
//! - **`write`** - POST /events, PUT /events/{id}, DELETE /events/{id} (admin)

pub mod read;
pub mod write;

pub use read::{get_event, list_events};
pub use write::{create_event, delete_event, update_event};
