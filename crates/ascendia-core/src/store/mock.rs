//! In-memory mock store for deterministic tests.
//!
//! Records every write so tests can spy on store interactions, and exposes
//! failure switches so every error branch of the handlers can be exercised
//! without a database.

use std::{future::Future, pin::Pin};

use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    error::{Result, StoreError},
    models::{DocumentId, RecordKind},
    store::DocumentStore,
};

/// A stored document together with the metadata assigned at write time.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Identifier returned to the caller.
    pub id: DocumentId,
    /// Collection the document was written to.
    pub collection: RecordKind,
    /// The document payload as received.
    pub document: Value,
}

/// Mock document store with spy and failure-injection support.
pub struct MockDocumentStore {
    documents: Mutex<Vec<StoredDocument>>,
    write_error: Mutex<Option<String>>,
    listing_error: Mutex<Option<String>>,
    collections_override: Mutex<Option<Vec<String>>>,
    name: String,
}

impl MockDocumentStore {
    /// Creates an empty mock store named `mockdb`.
    pub fn new() -> Self {
        Self::with_name("mockdb")
    }

    /// Creates an empty mock store with the given diagnostics name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            write_error: Mutex::new(None),
            listing_error: Mutex::new(None),
            collections_override: Mutex::new(None),
            name: name.into(),
        }
    }

    /// Makes every subsequent `create_document` fail with `message`.
    pub async fn fail_writes(&self, message: impl Into<String>) {
        *self.write_error.lock().await = Some(message.into());
    }

    /// Makes every subsequent `list_collection_names` fail with `message`.
    pub async fn fail_listing(&self, message: impl Into<String>) {
        *self.listing_error.lock().await = Some(message.into());
    }

    /// Overrides the collection listing, regardless of stored documents.
    pub async fn set_collections(&self, names: Vec<String>) {
        *self.collections_override.lock().await = Some(names);
    }

    /// Number of successful writes so far.
    pub async fn write_count(&self) -> usize {
        self.documents.lock().await.len()
    }

    /// Documents written to the given collection, in write order.
    pub async fn documents_in(&self, collection: RecordKind) -> Vec<Value> {
        self.documents
            .lock()
            .await
            .iter()
            .filter(|stored| stored.collection == collection)
            .map(|stored| stored.document.clone())
            .collect()
    }

    /// Every stored document, in write order.
    pub async fn all_documents(&self) -> Vec<StoredDocument> {
        self.documents.lock().await.clone()
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MockDocumentStore {
    fn create_document(
        &self,
        collection: RecordKind,
        document: Value,
    ) -> Pin<Box<dyn Future<Output = Result<DocumentId>> + Send + '_>> {
        Box::pin(async move {
            if let Some(message) = self.write_error.lock().await.clone() {
                return Err(StoreError::Database(message));
            }

            let id = DocumentId::new();
            self.documents.lock().await.push(StoredDocument { id, collection, document });
            Ok(id)
        })
    }

    fn list_collection_names(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>> {
        Box::pin(async move {
            if let Some(message) = self.listing_error.lock().await.clone() {
                return Err(StoreError::Database(message));
            }

            if let Some(names) = self.collections_override.lock().await.clone() {
                return Ok(names);
            }

            let mut names: Vec<String> = Vec::new();
            for stored in self.documents.lock().await.iter() {
                let name = stored.collection.as_str().to_string();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            Ok(names)
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
