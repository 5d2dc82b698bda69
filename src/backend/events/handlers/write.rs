/**
 * Event Mutations
 *
 * `POST /events`, `PUT /events/{id}` and `DELETE /events/{id}`.
 *
 * Every handler takes `AdminUser` first, so authentication and role checks
 * happen before the path or body is looked at.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::events::db;
use crate::backend::events::model::{Event, EventCreate, EventUpdate};
use crate::backend::middleware::{AdminUser, ApiPath, ValidatedJson};

/// Create an event
///
/// # Errors
/// * `401` / `403` - caller is not an authenticated admin
/// * `422` - body fails validation
pub async fn create_event(
    AdminUser(admin): AdminUser,
    State(pool): State<SqlitePool>,
    ValidatedJson(input): ValidatedJson<EventCreate>,
) -> BackendResult<(StatusCode, Json<Event>)> {
    let event = db::create_event(&pool, &input).await?;
    tracing::info!("Event {} created by {}", event.id, admin.email);
    Ok((StatusCode::CREATED, Json(event)))
}

/// Replace every writable field of an event
///
/// # Errors
/// * `401` / `403` - caller is not an authenticated admin
/// * `404` - no event with this id
/// * `422` - body fails validation
pub async fn update_event(
    AdminUser(admin): AdminUser,
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(input): ValidatedJson<EventUpdate>,
) -> BackendResult<Json<Event>> {
    let event = db::update_event(&pool, id, &input)
        .await?
        .ok_or_else(|| BackendError::not_found("Event not found"))?;
    tracing::info!("Event {} updated by {}", event.id, admin.email);
    Ok(Json(event))
}

/// Delete an event
///
/// # Errors
/// * `401` / `403` - caller is not an authenticated admin
/// * `404` - no event with this id
pub async fn delete_event(
    AdminUser(admin): AdminUser,
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> BackendResult<StatusCode> {
    let deleted = db::delete_event(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Event not found"))?;
    tracing::info!("Event {} deleted by {}", deleted.id, admin.email);
    Ok(StatusCode::NO_CONTENT)
}
