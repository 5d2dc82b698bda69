/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and extractors.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "Event not found",
 *   "status": 404
 * }
 * ```
 *
 * 401 responses additionally carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "detail": message,
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if self.is_bearer_challenge() {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
