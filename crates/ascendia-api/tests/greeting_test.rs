//! Smoke tests for the greeting endpoints.

use ascendia_api::{create_router, AppState, EnvFlags};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

async fn get_message(uri: &str) -> (StatusCode, Value) {
    let app = create_router(AppState::new(None, EnvFlags::default()));
    let request =
        Request::builder().method("GET").uri(uri).body(Body::empty()).expect("build request");

    let response = app.oneshot(request).await.expect("execute request");
    let status = response.status();
    let body =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read response body");
    let json: Value = serde_json::from_slice(&body).expect("parse response json");
    (status, json)
}

#[tokio::test]
async fn root_greeting_responds() {
    let (status, body) = get_message("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn api_greeting_responds() {
    let (status, body) = get_message("/api/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}
