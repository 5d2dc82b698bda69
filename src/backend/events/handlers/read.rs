//! Public event reads: `GET /events` and `GET /events/{id}`.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::events::db;
use crate::backend::events::model::{Event, Pagination};
use crate::backend::middleware::{ApiPath, ApiQuery};

/// List events in creation order
///
/// `skip` defaults to 0 and `limit` to 100. `limit` has no upper bound.
pub async fn list_events(
    State(pool): State<SqlitePool>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> BackendResult<Json<Vec<Event>>> {
    tracing::debug!("Listing events skip={} limit={}", page.skip, page.limit);
    let events = db::list_events(&pool, page).await?;
    Ok(Json(events))
}

/// Fetch one event
///
/// # Errors
/// * `404 Not Found` - no event with this id
pub async fn get_event(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> BackendResult<Json<Event>> {
    db::get_event(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Event not found"))
}
