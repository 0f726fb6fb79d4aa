//! Tests for the mock document store.
//!
//! The mock is itself a testing tool, so its spy and failure-injection
//! behavior needs to be trustworthy.

use ascendia_core::{
    store::{mock::MockDocumentStore, DocumentStore},
    RecordKind, StoreError,
};
use serde_json::json;

#[tokio::test]
async fn writes_are_recorded_with_distinct_ids() {
    let store = MockDocumentStore::new();

    let first = store
        .create_document(RecordKind::Contact, json!({"name": "Jo"}))
        .await
        .expect("first write");
    let second = store
        .create_document(RecordKind::Contact, json!({"name": "Jo"}))
        .await
        .expect("second write");

    assert_ne!(first, second);
    assert_eq!(store.write_count().await, 2);
    assert_eq!(store.documents_in(RecordKind::Contact).await.len(), 2);
    assert_eq!(store.documents_in(RecordKind::Analytics).await.len(), 0);
}

#[tokio::test]
async fn injected_write_failure_is_surfaced() {
    let store = MockDocumentStore::new();
    store.fail_writes("boom").await;

    let result = store.create_document(RecordKind::Checkout, json!({})).await;

    match result {
        Err(StoreError::Database(message)) => assert_eq!(message, "boom"),
        other => panic!("expected database error, got {other:?}"),
    }
    assert_eq!(store.write_count().await, 0);
}

#[tokio::test]
async fn collection_names_derive_from_writes_in_order() {
    let store = MockDocumentStore::new();
    store.create_document(RecordKind::Analytics, json!({})).await.expect("write");
    store.create_document(RecordKind::Contact, json!({})).await.expect("write");
    store.create_document(RecordKind::Analytics, json!({})).await.expect("write");

    let names = store.list_collection_names().await.expect("list collections");
    assert_eq!(names, vec!["analytics".to_string(), "contact".to_string()]);
}

#[tokio::test]
async fn collection_override_takes_precedence() {
    let store = MockDocumentStore::new();
    store.create_document(RecordKind::Contact, json!({})).await.expect("write");
    store.set_collections(vec!["other".to_string()]).await;

    let names = store.list_collection_names().await.expect("list collections");
    assert_eq!(names, vec!["other".to_string()]);
}

#[tokio::test]
async fn injected_listing_failure_is_surfaced() {
    let store = MockDocumentStore::new();
    store.fail_listing("listing broke").await;

    assert!(store.list_collection_names().await.is_err());
}

#[tokio::test]
async fn store_name_is_reported() {
    let store = MockDocumentStore::with_name("diagnostics-db");
    assert_eq!(store.name(), "diagnostics-db");
}
