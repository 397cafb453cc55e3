//! Router tests driven through tower's `oneshot`, no socket involved
//!
//! Run with: cargo test -p sneakweb --test web_server_test

use std::fs;
use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sneakweb::{create_router, GamePage, WebState};
use tempfile::TempDir;
use tower::ServiceExt;

const PAGE: &str = "<!DOCTYPE html><html><body>SneakDog test page</body></html>";

fn app(static_dir: &Path) -> Router {
    create_router(WebState::new(GamePage::from_html(PAGE)), static_dir)
}

fn empty_static_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn post_highscore(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/highscore")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_serves_game_page() {
    let dir = empty_static_dir();
    let (status, body) = send(app(dir.path()), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), PAGE);
}

#[tokio::test]
async fn test_index_tolerates_any_query() {
    let dir = empty_static_dir();
    for uri in [
        "/?tgWebAppStartParam=abc&tgWebAppData=user%3D%7B%22id%22%3A1%7D",
        "/?a=1&a=2&a=3",
        "/?bad=%ZZ&=&&x",
        "/?%E0%A4%A",
        "/?",
    ] {
        let (status, body) = send(app(dir.path()), get(uri)).await;
        assert_eq!(status, StatusCode::OK, "query {} should be accepted", uri);
        assert_eq!(String::from_utf8(body).unwrap(), PAGE);
    }
}

#[tokio::test]
async fn test_highscore_acknowledges_submission() {
    let dir = empty_static_dir();
    let (status, body) = send(app(dir.path()), post_highscore(r#"{"score": 42, "user_id": "u1"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_highscore_without_score_is_acknowledged() {
    let dir = empty_static_dir();
    let (status, body) = send(app(dir.path()), post_highscore(r#"{"user_id": "u1"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_highscore_rejects_non_json_body() {
    let dir = empty_static_dir();
    let (status, body) = send(app(dir.path()), post_highscore("score=42")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_highscore_requires_post() {
    let dir = empty_static_dir();
    let (status, _) = send(app(dir.path()), get("/highscore")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let dir = empty_static_dir();
    let (status, body) = send(app(dir.path()), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok", "service": "sneakweb"}));
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = empty_static_dir();
    fs::write(dir.path().join("game.js"), "console.log('woof');").unwrap();

    let (status, body) = send(app(dir.path()), get("/static/game.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('woof');");

    let (status, _) = send(app(dir.path()), get("/static/missing.js")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let dir = empty_static_dir();
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://web.telegram.org")
        .body(Body::empty())
        .unwrap();

    let response = app(dir.path()).oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
