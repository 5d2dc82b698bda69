//! Assertions on HTTP responses
//!
//! Every failure the API returns has the shape
//! `{"detail": <message>, "status": <code>}`.

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert the status code and the JSON error body of a failed response
pub fn assert_error(response: &TestResponse, status: StatusCode, detail: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], detail, "body: {}", body);
    assert_eq!(body["status"], status.as_u16(), "body: {}", body);
}

/// Assert a 401 that carries `WWW-Authenticate: Bearer`
pub fn assert_bearer_challenge(response: &TestResponse, detail: &str) {
    assert_error(response, StatusCode::UNAUTHORIZED, detail);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

/// Assert the status code of a failed response without checking the message
pub fn assert_error_status(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body: serde_json::Value = response.json();
    assert!(body["detail"].is_string(), "body: {}", body);
    assert_eq!(body["status"], status.as_u16(), "body: {}", body);
}
