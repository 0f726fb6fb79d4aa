//! Document store abstraction.
//!
//! Provides a trait-based abstraction over document persistence so the HTTP
//! layer can run against PostgreSQL in production and lightweight test
//! doubles in tests. The store is injected as an optional capability
//! (`Option<Arc<dyn DocumentStore>>`); the "store absent" branch is an
//! explicit, first-class state rather than an import-time accident.

use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::{
    error::Result,
    models::{DocumentId, RecordKind},
};

pub mod mock;
pub mod postgres;

pub use postgres::PgDocumentStore;

/// Persistence operations required by the request handlers.
///
/// All write paths are append-only. Implementations must not retry or
/// buffer: callers decide per endpoint whether a failed write is surfaced
/// (contact) or deliberately discarded (checkout, analytics).
pub trait DocumentStore: Send + Sync + 'static {
    /// Appends a document to the given collection.
    ///
    /// Returns the identifier assigned to the stored document. Identical
    /// payloads written twice yield two documents with distinct IDs.
    fn create_document(
        &self,
        collection: RecordKind,
        document: Value,
    ) -> Pin<Box<dyn Future<Output = Result<DocumentId>> + Send + '_>>;

    /// Lists the distinct collection names currently present.
    ///
    /// Used only by the diagnostics endpoint; callers truncate the result
    /// for display.
    fn list_collection_names(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>>;

    /// Human-readable store name for diagnostics output.
    fn name(&self) -> &str;
}
