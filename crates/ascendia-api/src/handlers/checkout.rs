//! Mock checkout session handler.
//!
//! Generates a Stripe-like session locally, without any payment SDK. The
//! endpoint's contract is "always succeeds from the caller's perspective":
//! the store write is fire-and-forget and its result is deliberately
//! discarded after logging, accepting data loss on failure.

use ascendia_core::{CheckoutRecord, RecordKind};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    handlers::{validation_error_response, JsonBody},
    AppState,
};

/// Request body for POST `/api/checkout`.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutPayload {
    /// Course the caller intends to purchase, non-empty
    #[serde(rename = "courseId")]
    #[validate(length(min = 1))]
    pub course_id: String,
    /// Pricing plan, defaults to `"standard"`
    #[serde(default = "default_plan")]
    pub plan: String,
}

fn default_plan() -> String {
    "standard".to_string()
}

/// Response carrying the generated session.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Always true, regardless of store outcome
    pub ok: bool,
    /// Generated session identifier, `sess_` followed by digits
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Redirect-style URL embedding the session and course IDs
    pub url: String,
}

/// Generates a session identifier: `sess_` plus the Unix-millisecond
/// timestamp and a random six-digit suffix.
///
/// The suffix keeps IDs collision-resistant under concurrent requests while
/// preserving the `sess_<digits>` shape callers pattern-match on.
fn new_session_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::random::<u32>() % 1_000_000;
    format!("sess_{millis}{suffix:06}")
}

/// Creates a mock checkout session.
///
/// Validates the payload, generates the session identifier and URL, and
/// best-effort persists a `"checkout"` record. Always returns the session
/// to the caller whether the store succeeds, fails, or is absent.
///
/// # Errors
///
/// - 422: payload failed validation
#[instrument(name = "create_checkout", skip(state, payload))]
pub async fn create_checkout(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CheckoutPayload>,
) -> Response {
    if let Err(errors) = payload.validate() {
        warn!(field_count = errors.field_errors().len(), "Checkout payload failed validation");
        return validation_error_response(&errors);
    }

    let session_id = new_session_id();
    let session_url = format!("/checkout/success?sid={session_id}&course={}", payload.course_id);

    let record = CheckoutRecord::new(
        payload.course_id,
        payload.plan,
        session_id.clone(),
        session_url.clone(),
    );

    // Fire-and-forget: a lost checkout intent must not break the purchase
    // flow, so the write result stops here.
    if let Some(store) = state.store.as_ref() {
        match serde_json::to_value(&record) {
            Ok(document) => {
                if let Err(e) = store.create_document(RecordKind::Checkout, document).await {
                    warn!(error = %e, session_id = %session_id, "Checkout record write failed");
                }
            },
            Err(e) => {
                warn!(error = %e, session_id = %session_id, "Checkout record serialization failed");
            },
        }
    }

    info!(session_id = %session_id, "Checkout session created");
    Json(CheckoutResponse { ok: true, session_id, url: session_url }).into_response()
}
