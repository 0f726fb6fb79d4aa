//! Analytics event capture handler.
//!
//! Secondary telemetry: the store write is fire-and-forget and the caller
//! always receives a bare acknowledgement. Losing an event on store failure
//! is an accepted tradeoff.

use ascendia_core::{AnalyticsRecord, RecordKind};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::{
    handlers::{validation_error_response, JsonBody},
    AppState,
};

/// Request body for POST `/api/analytics`.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyticsPayload {
    /// Event name, 2-64 characters
    #[validate(length(min = 2, max = 64))]
    pub event: String,
    /// Open-ended event properties, unvalidated beyond being an object
    pub properties: Option<Map<String, Value>>,
    /// Open-ended user attributes, unvalidated beyond being an object
    pub user: Option<Map<String, Value>>,
}

/// Bare acknowledgement returned for every accepted event.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Always true, regardless of store outcome
    pub ok: bool,
}

/// Captures an analytics event.
///
/// Validates the payload, builds an `"analytics"` record with a UTC
/// received timestamp, and best-effort persists it. Always acknowledges.
///
/// # Errors
///
/// - 422: payload failed validation
#[instrument(name = "track_event", skip(state, payload), fields(event = %payload.event))]
pub async fn track_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AnalyticsPayload>,
) -> Response {
    if let Err(errors) = payload.validate() {
        warn!(field_count = errors.field_errors().len(), "Analytics payload failed validation");
        return validation_error_response(&errors);
    }

    let record = AnalyticsRecord::new(payload.event, payload.properties, payload.user);

    // Fire-and-forget: telemetry must never break user flows.
    if let Some(store) = state.store.as_ref() {
        match serde_json::to_value(&record) {
            Ok(document) => {
                if let Err(e) = store.create_document(RecordKind::Analytics, document).await {
                    warn!(error = %e, "Analytics record write failed");
                }
            },
            Err(e) => {
                warn!(error = %e, "Analytics record serialization failed");
            },
        }
    }

    debug!("Analytics event captured");
    Json(AnalyticsResponse { ok: true }).into_response()
}
