#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use contactbox_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// Config pointing at a database inside `dir`; every other value is the default.
pub fn test_config(dir: &TempDir) -> Config {
    test_config_with(dir, &[])
}

/// Like [`test_config`], with extra `CF_*` values applied on top.
pub fn test_config_with(dir: &TempDir, overrides: &[(&str, &str)]) -> Config {
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    Config::from_lookup(|key| match key {
        "CF_DB_PATH" => Some(db_path.clone()),
        _ => overrides
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string()),
    })
    .unwrap()
}

/// Router over a fresh on-disk store. Keep the returned dir alive for the test.
pub async fn build_test_router() -> (TempDir, Router) {
    build_test_router_with(&[]).await
}

pub async fn build_test_router_with(overrides: &[(&str, &str)]) -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = test_config_with(&tmp, overrides);
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn post_contact(app: &Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn list_contacts(app: &Router) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .uri("/api/contacts")
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
