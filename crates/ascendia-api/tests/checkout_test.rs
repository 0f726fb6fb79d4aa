//! Integration tests for the mock checkout endpoint.
//!
//! Tests POST `/api/checkout` session generation and the "always succeeds
//! from the caller's perspective" contract across store outcomes.

use std::sync::Arc;

use ascendia_api::{create_router, AppState, EnvFlags};
use ascendia_core::{
    store::{mock::MockDocumentStore, DocumentStore},
    RecordKind,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router_with_store(store: &Arc<MockDocumentStore>) -> Router {
    let state = AppState::new(Some(store.clone() as Arc<dyn DocumentStore>), EnvFlags::default());
    create_router(state)
}

fn router_without_store() -> Router {
    create_router(AppState::new(None, EnvFlags::default()))
}

async fn post_checkout(app: Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).expect("serialize payload")))
        .expect("build request");

    let response = app.oneshot(request).await.expect("execute request");
    let status = response.status();
    let body =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read response body");
    let json: Value = serde_json::from_slice(&body).expect("parse response json");
    (status, json)
}

fn assert_session_shape(body: &Value, course_id: &str) {
    let session_id = body["sessionId"].as_str().expect("sessionId should be a string");
    assert!(session_id.starts_with("sess_"), "unexpected session id: {session_id}");
    assert!(
        session_id["sess_".len()..].chars().all(|c| c.is_ascii_digit()),
        "session id suffix should be digits: {session_id}"
    );

    let url = body["url"].as_str().expect("url should be a string");
    assert_eq!(url, format!("/checkout/success?sid={session_id}&course={course_id}"));
}

/// Happy path: session is generated, intent is persisted tagged
/// `"checkout"`, and the default plan is recorded.
#[tokio::test]
async fn checkout_creates_session_and_persists_intent() {
    let store = Arc::new(MockDocumentStore::new());
    let app = router_with_store(&store);

    let (status, body) = post_checkout(app, json!({"courseId": "c1"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_session_shape(&body, "c1");

    let documents = store.documents_in(RecordKind::Checkout).await;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["_type"], "checkout");
    assert_eq!(documents[0]["courseId"], "c1");
    assert_eq!(documents[0]["plan"], "standard");
    assert_eq!(documents[0]["session_id"], body["sessionId"]);
    assert_eq!(documents[0]["session_url"], body["url"]);
}

/// Store failure is swallowed: the caller still gets a complete session.
#[tokio::test]
async fn checkout_succeeds_when_store_write_fails() {
    let store = Arc::new(MockDocumentStore::new());
    store.fail_writes("checkout collection offline").await;
    let app = router_with_store(&store);

    let (status, body) = post_checkout(app, json!({"courseId": "c1"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_session_shape(&body, "c1");
    assert_eq!(store.write_count().await, 0, "the failed write must not be retried");
}

/// No store at all: same caller-visible contract.
#[tokio::test]
async fn checkout_succeeds_without_store() {
    let (status, body) = post_checkout(router_without_store(), json!({"courseId": "rust-101"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_session_shape(&body, "rust-101");
}

/// An explicitly supplied plan is recorded as-is.
#[tokio::test]
async fn explicit_plan_is_recorded() {
    let store = Arc::new(MockDocumentStore::new());
    let app = router_with_store(&store);

    let (status, _) = post_checkout(app, json!({"courseId": "c1", "plan": "premium"})).await;
    assert_eq!(status, StatusCode::OK);

    let documents = store.documents_in(RecordKind::Checkout).await;
    assert_eq!(documents[0]["plan"], "premium");
}

/// Empty or missing courseId is rejected with 422 before persistence.
#[tokio::test]
async fn missing_or_empty_course_id_is_rejected() {
    let store = Arc::new(MockDocumentStore::new());

    let (status, body) = post_checkout(router_with_store(&store), json!({"courseId": ""})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["fields"].get("course_id").is_some() ||
        body["error"]["fields"].get("courseId").is_some());

    let (status, body) = post_checkout(router_with_store(&store), json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_failed");

    assert_eq!(store.write_count().await, 0);
}

/// Two sessions created back-to-back get distinct identifiers even within
/// the same millisecond window.
#[tokio::test]
async fn session_ids_are_collision_resistant() {
    let store = Arc::new(MockDocumentStore::new());

    let (_, first) = post_checkout(router_with_store(&store), json!({"courseId": "c1"})).await;
    let (_, second) = post_checkout(router_with_store(&store), json!({"courseId": "c1"})).await;

    assert_ne!(first["sessionId"], second["sessionId"]);
}
