//! Integration tests for the HTTP API
//!
//! Drives the router directly with `oneshot` over an in-memory database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use libpostcomposer::service::ComposerService;
use libpostcomposer::{Database, MediaItem, MediaType};
use postcomposer_server::build_app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn setup() -> (Router, Arc<ComposerService>) {
    let db = Database::in_memory().await.expect("in-memory database");
    let service = Arc::new(ComposerService::from_database(db));
    (build_app(Arc::clone(&service)), service)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup().await;
    let response = app.oneshot(get("/health")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.expect("body").to_bytes();
    assert_eq!(std::str::from_utf8(&body).expect("utf8"), "OK");
}

#[tokio::test]
async fn test_create_user_without_email_is_rejected() {
    let (app, service) = setup().await;

    let (status, body) = send(app, post_json("/api/users", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Email is required" }));
    assert!(service.users().list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_with_empty_email_is_rejected() {
    let (app, _) = setup().await;

    let (status, body) = send(app, post_json("/api/users", json!({ "email": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn test_create_user_returns_created_record() {
    let (app, _) = setup().await;

    let (status, body) = send(
        app,
        post_json(
            "/api/users",
            json!({ "email": "a@b.com", "name": "Ada", "clerkId": "user_123" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let user = &body["user"];
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(user["name"], "Ada");
    assert_eq!(user["clerkId"], "user_123");
    assert!(user["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_list_users_after_create() {
    let (app, _) = setup().await;

    let (status, _) = send(
        app.clone(),
        post_json("/api/users", json!({ "email": "one@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);

    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "one@example.com");
}

#[tokio::test]
async fn test_duplicate_email_is_opaque_server_error() {
    let (app, _) = setup().await;
    let body = json!({ "email": "dup@example.com" });

    let (status, _) = send(app.clone(), post_json("/api/users", body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = send(app, post_json("/api/users", body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response, json!({ "error": "Failed to create user" }));
}

async fn post_raw(app: Router, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request");
    send(app, request).await
}

#[tokio::test]
async fn test_malformed_json_is_opaque_server_error() {
    let (app, service) = setup().await;

    let (status, body) = post_raw(app, "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create user" }));
    assert!(service.users().list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrongly_typed_email_is_opaque_server_error() {
    let (app, service) = setup().await;

    let (status, body) = post_raw(app, r#"{"email": 5}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create user" }));
    assert!(service.users().list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_media_query_uses_search_then_type() {
    let (app, service) = setup().await;
    for (name, media_type) in [
        ("Beach Sunset.jpg", MediaType::Image),
        ("beach-drone.mp4", MediaType::Video),
        ("Office.png", MediaType::Image),
    ] {
        service
            .media()
            .add(MediaItem::new(
                name.to_string(),
                media_type,
                1024,
                format!("https://cdn.example.com/{}", name),
            ))
            .await
            .unwrap();
    }

    let (status, body) = send(app.clone(), get("/api/media?q=BEACH&type=video")).await;
    assert_eq!(status, StatusCode::OK);
    let media = body["media"].as_array().expect("media array");
    assert_eq!(media.len(), 1);
    assert_eq!(media[0]["name"], "beach-drone.mp4");
    assert_eq!(media[0]["type"], "video");

    let (_, body) = send(app.clone(), get("/api/media?type=image")).await;
    let names: Vec<&str> = body["media"]
        .as_array()
        .expect("media array")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Beach Sunset.jpg", "Office.png"]);

    let (_, body) = send(app, get("/api/media")).await;
    assert_eq!(body["media"].as_array().expect("media array").len(), 3);
}

#[tokio::test]
async fn test_media_query_with_unknown_type_is_rejected() {
    let (app, _) = setup().await;
    let (status, body) = send(app, get("/api/media?type=audio")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid media query" }));
}
