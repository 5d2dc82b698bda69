//! Events API integration tests
//!
//! Public reads, admin-only mutations and pagination.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{
    admin_token, assert_bearer_challenge, assert_error, assert_error_status, create_test_app,
    event_body, normal_token,
};

#[tokio::test]
async fn test_create_then_fetch() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    let response = app
        .server
        .post("/events")
        .authorization_bearer(&token)
        .json(&json!({"title": "T1", "date": "2024-01-01", "time": "10:00"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();

    let response = app.server.get(&format!("/events/{}", created["id"])).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: serde_json::Value = response.json();

    assert_eq!(fetched, created);
    assert_eq!(fetched["title"], "T1");
    assert_eq!(fetched["date"], "2024-01-01");
    assert_eq!(fetched["time"], "10:00");
    assert!(fetched["description"].is_null());
    assert!(fetched["image_url"].is_null());
    assert!(fetched["created_at"].is_string());
    assert!(fetched["updated_at"].is_null());
}

#[tokio::test]
async fn test_get_unknown_event() {
    let app = create_test_app().await;

    let response = app.server.get("/events/999").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Event not found");
}

#[tokio::test]
async fn test_get_non_numeric_id() {
    let app = create_test_app().await;

    let response = app.server.get("/events/abc").await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_normal_user_cannot_create() {
    let app = create_test_app().await;
    let token = normal_token(&app.server).await;

    let response = app
        .server
        .post("/events")
        .authorization_bearer(&token)
        .json(&event_body("T1"))
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "Not enough permissions");
}

#[tokio::test]
async fn test_create_without_token() {
    let app = create_test_app().await;

    let response = app.server.post("/events").json(&event_body("T1")).await;

    assert_bearer_challenge(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_create_with_garbage_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/events")
        .authorization_bearer("not.a.jwt")
        .json(&event_body("T1"))
        .await;

    assert_bearer_challenge(&response, "Could not validate credentials");
}

#[tokio::test]
async fn test_auth_is_checked_before_body() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/events")
        .json(&json!({"title": ""}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_invalid_body() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    for body in [
        json!({"title": "", "date": "2024-01-01", "time": "10:00"}),
        json!({"title": "T1", "time": "10:00"}),
    ] {
        let response = app
            .server
            .post("/events")
            .authorization_bearer(&token)
            .json(&body)
            .await;
        assert_error_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    let created: serde_json::Value = app
        .server
        .post("/events")
        .authorization_bearer(&token)
        .json(&event_body("T1"))
        .await
        .json();
    let path = format!("/events/{}", created["id"]);

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&token)
        .json(&json!({
            "title": "T2",
            "date": "2024-02-02",
            "time": "11:30",
            "image_url": "https://example.com/poster.png"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: serde_json::Value = app.server.get(&path).await.json();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], "T2");
    assert_eq!(fetched["date"], "2024-02-02");
    assert_eq!(fetched["time"], "11:30");
    assert!(fetched["description"].is_null());
    assert_eq!(fetched["image_url"], "https://example.com/poster.png");
    assert_eq!(fetched["created_at"], created["created_at"]);
    assert!(fetched["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_unknown_event() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    let response = app
        .server
        .put("/events/42")
        .authorization_bearer(&token)
        .json(&event_body("T2"))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "Event not found");
}

#[tokio::test]
async fn test_normal_user_cannot_update_or_delete() {
    let app = create_test_app().await;
    let admin = admin_token(&app.server).await;
    let normal = normal_token(&app.server).await;

    let created: serde_json::Value = app
        .server
        .post("/events")
        .authorization_bearer(&admin)
        .json(&event_body("T1"))
        .await
        .json();
    let path = format!("/events/{}", created["id"]);

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&normal)
        .json(&event_body("T2"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app.server.delete(&path).authorization_bearer(&normal).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let fetched: serde_json::Value = app.server.get(&path).await.json();
    assert_eq!(fetched["title"], "T1");
}

#[tokio::test]
async fn test_delete_twice() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    let created: serde_json::Value = app
        .server
        .post("/events")
        .authorization_bearer(&token)
        .json(&event_body("T1"))
        .await
        .json();
    let path = format!("/events/{}", created["id"]);

    let response = app.server.delete(&path).authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    let response = app.server.delete(&path).authorization_bearer(&token).await;
    assert_error(&response, StatusCode::NOT_FOUND, "Event not found");

    let response = app.server.get(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = create_test_app().await;
    let token = admin_token(&app.server).await;

    for i in 0..150 {
        let response = app
            .server
            .post("/events")
            .authorization_bearer(&token)
            .json(&event_body(&format!("E{i}")))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let first: Vec<serde_json::Value> = app
        .server
        .get("/events")
        .add_query_param("skip", 0)
        .add_query_param("limit", 100)
        .await
        .json();
    let second: Vec<serde_json::Value> = app
        .server
        .get("/events")
        .add_query_param("skip", 100)
        .add_query_param("limit", 100)
        .await
        .json();

    assert_eq!(first.len(), 100);
    assert_eq!(second.len(), 50);

    let titles: Vec<String> = first
        .iter()
        .chain(&second)
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (0..150).map(|i| format!("E{i}")).collect();
    assert_eq!(titles, expected);

    let defaulted: Vec<serde_json::Value> = app.server.get("/events").await.json();
    assert_eq!(defaulted.len(), 100);
}

#[tokio::test]
async fn test_list_trailing_slash_alias() {
    let app = create_test_app().await;

    let response = app.server.get("/events/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let events: Vec<serde_json::Value> = response.json();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_list_bad_query() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/events")
        .add_query_param("skip", "-1")
        .await;

    assert_error_status(&response, StatusCode::BAD_REQUEST);
}
