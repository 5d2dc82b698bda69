/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router and applies the
 * cross-cutting layers.
 *
 * # Route Order
 *
 * 1. Welcome route (`GET /`)
 * 2. User routes (`/users/...`)
 * 3. Event routes (`/events...`)
 * 4. JSON 404 fallback
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer` - any origin, method and header
 */

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_event_routes, configure_user_routes};
use crate::backend::server::state::AppState;

/// Greeting returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the Event Management System API";

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /` - Welcome message
/// - `POST /users/signup` - User registration
/// - `POST /users/login` - Form login, returns a bearer token
/// - `GET /events` - List events (`skip`, `limit`)
/// - `POST /events` - Create event (admin)
/// - `GET /events/{id}` - Fetch event
/// - `PUT /events/{id}` - Replace event (admin)
/// - `DELETE /events/{id}` - Delete event (admin)
///
/// Unknown routes get a JSON 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    let router = configure_user_routes(router);
    let router = configure_event_routes(router);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn not_found() -> impl IntoResponse {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
