//! Domain records and strongly-typed identifiers.
//!
//! Defines the three append-only record kinds (contact, checkout, analytics)
//! and the newtype ID wrapper for stored documents. Records are written once
//! and never mutated; each carries a `_type` discriminator and a UTC
//! timestamp so documents remain self-describing in the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Strongly-typed identifier for a stored document.
///
/// Wraps a UUID to prevent mixing with other ID types. Assigned at write
/// time; two writes of identical payloads produce two distinct IDs (no
/// deduplication anywhere in the system).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Creates a new random document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Discriminator for the three record kinds.
///
/// Doubles as the store collection name and the `_type` tag embedded in
/// each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Contact form submission.
    Contact,
    /// Mock checkout session intent.
    Checkout,
    /// Client-side analytics event.
    Analytics,
}

impl RecordKind {
    /// Collection name used in the document store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Checkout => "checkout",
            Self::Analytics => "analytics",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact form submission, tagged `"contact"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Submitter display name.
    pub name: String,
    /// Submitter email address (validated upstream).
    pub email: String,
    /// Free-form message body.
    pub message: String,
    /// Record discriminator, always `RecordKind::Contact`.
    #[serde(rename = "_type")]
    pub kind: RecordKind,
    /// UTC timestamp assigned when the request was handled.
    pub received_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Builds a record stamped with the current time.
    pub fn new(name: String, email: String, message: String) -> Self {
        Self { name, email, message, kind: RecordKind::Contact, received_at: Utc::now() }
    }
}

/// A mock checkout session intent, tagged `"checkout"`.
///
/// Not a payment: the session is generated locally and the URL points at a
/// frontend success route. Session IDs are not required to be unique across
/// restarts, only collision-resistant under concurrent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Course the caller intends to purchase.
    #[serde(rename = "courseId")]
    pub course_id: String,
    /// Pricing plan, defaulted to `"standard"` upstream.
    pub plan: String,
    /// Generated session identifier (`sess_` followed by digits).
    pub session_id: String,
    /// Redirect-style URL embedding session and course IDs.
    pub session_url: String,
    /// Record discriminator, always `RecordKind::Checkout`.
    #[serde(rename = "_type")]
    pub kind: RecordKind,
    /// UTC timestamp assigned when the session was created.
    pub created_at: DateTime<Utc>,
}

impl CheckoutRecord {
    /// Builds a record stamped with the current time.
    pub fn new(course_id: String, plan: String, session_id: String, session_url: String) -> Self {
        Self {
            course_id,
            plan,
            session_id,
            session_url,
            kind: RecordKind::Checkout,
            created_at: Utc::now(),
        }
    }
}

/// A client analytics event, tagged `"analytics"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// Event name, e.g. `page_view`.
    pub event: String,
    /// Open-ended event properties, unvalidated beyond being an object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Open-ended user attributes, unvalidated beyond being an object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Map<String, Value>>,
    /// Record discriminator, always `RecordKind::Analytics`.
    #[serde(rename = "_type")]
    pub kind: RecordKind,
    /// UTC timestamp assigned when the event was handled.
    pub received_at: DateTime<Utc>,
}

impl AnalyticsRecord {
    /// Builds a record stamped with the current time.
    pub fn new(
        event: String,
        properties: Option<Map<String, Value>>,
        user: Option<Map<String, Value>>,
    ) -> Self {
        Self { event, properties, user, kind: RecordKind::Analytics, received_at: Utc::now() }
    }
}
