//! PostgreSQL-backed document store.
//!
//! Stores every record kind in a single `documents` table with a `collection`
//! discriminator column and a JSONB payload. Schema evolution is not a
//! concern: records are schemaless beyond upstream validation and are never
//! updated after insert.

use std::{future::Future, pin::Pin};

use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    error::Result,
    models::{DocumentId, RecordKind},
    store::DocumentStore,
};

/// Document store backed by a shared PostgreSQL connection pool.
///
/// Pooling, reconnection, and timeouts belong to the pool configured by the
/// caller; this type only issues single-statement queries.
pub struct PgDocumentStore {
    pool: PgPool,
    database_name: String,
}

impl PgDocumentStore {
    /// Creates a store over an existing pool.
    ///
    /// `database_name` is reported by diagnostics and carries no routing
    /// significance.
    pub fn new(pool: PgPool, database_name: impl Into<String>) -> Self {
        Self { pool, database_name: database_name.into() }
    }

    /// Ensures the backing table exists.
    ///
    /// Idempotent; called once at startup before the server accepts
    /// requests.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                id UUID PRIMARY KEY,
                collection TEXT NOT NULL,
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl DocumentStore for PgDocumentStore {
    fn create_document(
        &self,
        collection: RecordKind,
        document: Value,
    ) -> Pin<Box<dyn Future<Output = Result<DocumentId>> + Send + '_>> {
        Box::pin(async move {
            let id = DocumentId::new();

            sqlx::query(
                "INSERT INTO documents (id, collection, doc, created_at) VALUES ($1, $2, $3, $4)",
            )
            .bind(id.0)
            .bind(collection.as_str())
            .bind(&document)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

            debug!(document_id = %id, collection = %collection, "Document stored");
            Ok(id)
        })
    }

    fn list_collection_names(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>> {
        Box::pin(async move {
            let rows: Vec<(String,)> =
                sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                    .fetch_all(&self.pool)
                    .await?;

            Ok(rows.into_iter().map(|(name,)| name).collect())
        })
    }

    fn name(&self) -> &str {
        &self.database_name
    }
}
