//! Core domain types for the Ascendia backend.
//!
//! Provides the append-only record models, the error taxonomy, and the
//! document store abstraction shared by the HTTP layer. The store is an
//! optional capability: the service runs without one and degrades to
//! "accepted but not stored" behavior.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{AnalyticsRecord, CheckoutRecord, ContactRecord, DocumentId, RecordKind};
pub use store::DocumentStore;
