//! Authentication API integration tests
//!
//! Tests for the signup and login endpoints.

use axum::http::StatusCode;
use eventhub::backend::auth::users::count_users;
use eventhub::backend::auth::TokenService;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{
    assert_bearer_challenge, assert_error, assert_error_status, create_test_app, login_user,
    signup_user, TEST_JWT_SECRET,
};

#[tokio::test]
async fn test_signup_success() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/users/signup")
        .json(&json!({
            "name": "Ann",
            "email": "ann@example.com",
            "role": "admin",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({"id": body["id"], "name": "Ann", "email": "ann@example.com", "role": "admin"})
    );
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_signup_role_defaults_to_normal() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/users/signup")
        .json(&json!({"name": "Bo", "email": "bo@example.com", "password": "pw"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["role"], "normal");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = create_test_app().await;
    signup_user(&app.server, "dup@example.com", "password123", "normal").await;

    let response = app
        .server
        .post("/users/signup")
        .json(&json!({
            "name": "Again",
            "email": "dup@example.com",
            "password": "different"
        }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Email already registered");
    assert_eq!(count_users(app.db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_signup_invalid_input() {
    let app = create_test_app().await;

    let cases = [
        json!({"name": "", "email": "a@example.com", "password": "pw"}),
        json!({"name": "A", "email": "not-an-email", "password": "pw"}),
        json!({"name": "A", "email": "a@example.com", "password": ""}),
        json!({"name": "A", "email": "a@example.com", "role": "root", "password": "pw"}),
        json!({"email": "a@example.com", "password": "pw"}),
    ];

    for case in cases {
        let response = app.server.post("/users/signup").json(&case).await;
        assert_error_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    }
    assert_eq!(count_users(app.db.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_login_token_subject_is_email() {
    let app = create_test_app().await;
    signup_user(&app.server, "ann@example.com", "password123", "normal").await;

    let token = login_user(&app.server, "ann@example.com", "password123").await;

    let tokens = TokenService::new(TEST_JWT_SECRET, 30);
    assert_eq!(tokens.subject(&token).unwrap(), "ann@example.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = create_test_app().await;
    signup_user(&app.server, "ann@example.com", "password123", "normal").await;

    let response = app
        .server
        .post("/users/login")
        .form(&[("username", "ann@example.com"), ("password", "wrong")])
        .await;

    assert_bearer_challenge(&response, "Incorrect email or password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/users/login")
        .form(&[("username", "ghost@example.com"), ("password", "password123")])
        .await;

    assert_bearer_challenge(&response, "Incorrect email or password");
}

#[tokio::test]
async fn test_login_requires_form_body() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/users/login")
        .json(&json!({"username": "ann@example.com", "password": "pw"}))
        .await;

    assert_error_status(&response, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
