//! Front-end serving alongside the API

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use libcat_server::build_router;
use libcat_server::db::SqliteStore;

async fn app_with_assets() -> (TempDir, Router) {
    let dir = TempDir::new().expect("tmp");
    std::fs::write(dir.path().join("index.html"), "<h1>Library</h1>").unwrap();
    std::fs::write(dir.path().join("script.js"), "console.log('ok');").unwrap();

    let store = SqliteStore::open_in_memory().await.expect("in-memory store");
    let app = build_router(Arc::new(store), dir.path());
    (dir, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn root_serves_index_document() {
    let (_dir, app) = app_with_assets().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>Library</h1>");
}

#[tokio::test]
async fn asset_path_is_served() {
    let (_dir, app) = app_with_assets().await;

    let (status, body) = get(&app, "/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("console.log"));
}

#[tokio::test]
async fn missing_asset_is_404() {
    let (_dir, app) = app_with_assets().await;

    let (status, _) = get(&app, "/styles.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_routes_take_precedence() {
    let (_dir, app) = app_with_assets().await;

    let (status, body) = get(&app, "/api/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}
