use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, AppState};
use service::auth::AuthConfig;
use service::Services;

fn app() -> Router {
    let (services, _store) = Services::in_memory(AuthConfig::new("http-test-key", "http-test-salt")).unwrap();
    routes::build_router(AppState::new(services), tower_http::cors::CorsLayer::very_permissive())
}

async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req.header("content-type", "application/json").body(Body::from(b.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

async fn sign_up_and_in(app: &Router, username: &str) -> String {
    let (status, body) =
        send(app, "POST", "/auth/sign-up", None, Some(json!({"name": username, "username": username, "password": "pw"}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, body) =
        send(app, "POST", "/auth/sign-in", None, Some(json!({"username": username, "password": "pw"}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send(&app(), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn api_requires_bearer_token() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/lists", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");

    let (status, _) = send(&app, "GET", "/api/lists", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder().uri("/api/lists").header("authorization", "Token abc").body(Body::empty()).unwrap();
    assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = app();
    sign_up_and_in(&app, "ann").await;
    let (status, _) = send(&app, "POST", "/auth/sign-in", None, Some(json!({"username": "ann", "password": "x"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn lists_and_items_end_to_end() {
    let app = app();
    let ann = sign_up_and_in(&app, "ann").await;
    let bob = sign_up_and_in(&app, "bob").await;

    let (status, body) = send(&app, "POST", "/api/lists", Some(&ann), Some(json!({"title": "groceries"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1}));

    let (status, body) = send(&app, "POST", "/api/lists/1/items", Some(&ann), Some(json!({"title": "milk"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1}));

    let (status, body) = send(&app, "GET", "/api/lists/1/items", Some(&ann), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "title": "milk", "description": "", "done": false}]));

    let (status, _) = send(&app, "GET", "/api/lists/1/items", Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "POST", "/api/lists/1/items", Some(&bob), Some(json!({"title": "beer"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "PUT", "/api/items/1", Some(&ann), Some(json!({"done": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    let (_, body) = send(&app, "GET", "/api/items/1", Some(&ann), None).await;
    assert_eq!(body["done"], true);
    assert_eq!(body["title"], "milk");

    let (status, _) = send(&app, "DELETE", "/api/items/1", Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/lists/1", Some(&ann), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/items/1", Some(&ann), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_title_is_bad_request() {
    let app = app();
    let ann = sign_up_and_in(&app, "ann").await;
    let (status, body) = send(&app, "POST", "/api/lists", Some(&ann), Some(json!({"title": " "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid input");
}

#[tokio::test]
async fn failed_ownership_write_is_internal_error() {
    let (services, store) = Services::in_memory(AuthConfig::new("http-test-key", "http-test-salt")).unwrap();
    let app = routes::build_router(AppState::new(services), tower_http::cors::CorsLayer::very_permissive());
    let ann = sign_up_and_in(&app, "ann").await;

    store.fail_link_writes(true);
    let (status, body) = send(&app, "POST", "/api/lists", Some(&ann), Some(json!({"title": "a"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("message").is_none());
    assert_eq!(store.list_count().await, 0);
}

#[tokio::test]
async fn unreadable_bodies_are_json_bad_requests() {
    let app = app();
    let ann = sign_up_and_in(&app, "ann").await;

    let (status, body) = send(&app, "POST", "/api/lists", Some(&ann), Some(json!({"description": "no title"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid input");
    assert!(body["message"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/auth/sign-up")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "invalid input");

    let (status, body) = send(&app, "PUT", "/api/items/1", Some(&ann), Some(json!({"done": "yes"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid input");
}

#[tokio::test]
async fn non_ascii_auth_header_is_malformed() {
    let app = app();
    let mut req = Request::builder().uri("/api/lists").body(Body::empty()).unwrap();
    req.headers_mut().insert("authorization", HeaderValue::from_bytes(b"Bearer \xff").unwrap());
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "invalid auth header");
}
