/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Users
 * - `POST /users/signup` - User registration
 * - `POST /users/login` - Form login
 *
 * ## Events
 * - `GET /events`, `GET /events/` - List events
 * - `POST /events`, `POST /events/` - Create event (admin)
 * - `GET /events/{id}` - Fetch event
 * - `PUT /events/{id}` - Replace event (admin)
 * - `DELETE /events/{id}` - Delete event (admin)
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{login, signup};
use crate::backend::events::handlers::{
    create_event, delete_event, get_event, list_events, update_event,
};
use crate::backend::server::state::AppState;

/// Configure user routes
///
/// Both routes are public.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
}

/// Configure event routes
///
/// Reads are public. Mutations require an admin bearer token, checked by the
/// `AdminUser` extractor in each handler. The collection is also served
/// with a trailing slash.
pub fn configure_event_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/events", get(list_events).post(create_event))
        .route("/events/", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}
