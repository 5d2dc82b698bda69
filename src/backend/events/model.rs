//! Event records and the request shapes that write them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{require_non_empty, Validate};
use crate::shared::SharedError;

/// Default page size for `GET /events`
pub const DEFAULT_LIMIT: u32 = 100;

/// A scheduled event as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Free-form date text, stored as given
    pub date: String,
    /// Free-form time text, stored as given
    pub time: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable event fields
///
/// Used for both creation and update. An update overwrites every field,
/// so an omitted `description` or `image_url` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /events`
pub type EventCreate = EventInput;

/// Body of `PUT /events/{id}`
pub type EventUpdate = EventInput;

impl Validate for EventInput {
    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("title", &self.title)
    }
}

/// `skip` / `limit` query parameters of `GET /events`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
