/**
 * Database Operations for Events
 *
 * CRUD over the `events` table. Each write is a single statement, so it is
 * atomic for the record it touches.
 *
 * Listing is in insertion order (ascending id).
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::events::model::{Event, EventInput, Pagination};

const EVENT_COLUMNS: &str =
    "id, title, description, date, time, image_url, created_at, updated_at";

/// List events in creation order, one page at a time
///
/// `limit` is applied as given, with no upper bound.
pub async fn list_events(pool: &SqlitePool, page: Pagination) -> Result<Vec<Event>, sqlx::Error> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC LIMIT ? OFFSET ?");
    sqlx::query_as::<_, Event>(&sql)
        .bind(i64::from(page.limit))
        .bind(i64::from(page.skip))
        .fetch_all(pool)
        .await
}

/// Get a single event
///
/// # Returns
/// Event or None if not found
pub async fn get_event(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?");
    sqlx::query_as::<_, Event>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert an event
///
/// `created_at` is stamped now; `updated_at` starts out null.
pub async fn create_event(pool: &SqlitePool, input: &EventInput) -> Result<Event, sqlx::Error> {
    let sql = format!(
        "INSERT INTO events (title, description, date, time, image_url, created_at) \
         VALUES (?, ?, ?, ?, ?, ?) \
         RETURNING {EVENT_COLUMNS}"
    );
    sqlx::query_as::<_, Event>(&sql)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.date)
        .bind(&input.time)
        .bind(&input.image_url)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

/// Overwrite every writable field of an event
///
/// # Returns
/// Updated event or None if `id` does not exist
pub async fn update_event(
    pool: &SqlitePool,
    id: i64,
    input: &EventInput,
) -> Result<Option<Event>, sqlx::Error> {
    let sql = format!(
        "UPDATE events \
         SET title = ?, description = ?, date = ?, time = ?, image_url = ?, updated_at = ? \
         WHERE id = ? \
         RETURNING {EVENT_COLUMNS}"
    );
    sqlx::query_as::<_, Event>(&sql)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.date)
        .bind(&input.time)
        .bind(&input.image_url)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete an event
///
/// # Returns
/// The deleted event or None if `id` does not exist
pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    let sql = format!("DELETE FROM events WHERE id = ? RETURNING {EVENT_COLUMNS}");
    sqlx::query_as::<_, Event>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}
