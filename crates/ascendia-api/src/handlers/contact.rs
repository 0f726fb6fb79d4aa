//! Contact form submission handler.
//!
//! The one write path where persistence failure is surfaced to the caller:
//! a lost contact submission must be visible to the submitter and operator,
//! unlike the telemetry endpoints.

use ascendia_core::{ContactRecord, RecordKind};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::{
    handlers::{create_error_response, validation_error_response, JsonBody},
    AppState,
};

/// Request body for POST `/api/contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactPayload {
    /// Submitter display name, 2-120 characters
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    /// Submitter email address
    #[validate(email)]
    pub email: String,
    /// Free-form message body, 4-4000 characters
    #[validate(length(min = 4, max = 4000))]
    pub message: String,
}

/// Acknowledgement returned for accepted submissions.
///
/// `id` is present only when a store is configured and the write succeeded.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Always true on the success path
    pub ok: bool,
    /// Identifier of the stored document, if persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Accepts a contact form submission.
///
/// Validates the payload, builds a `"contact"` record with a UTC received
/// timestamp, and persists it when a store is configured.
///
/// # Errors
///
/// - 422: payload failed validation (per-field diagnostics in the body)
/// - 500: store write failed (the failure reason is included)
#[instrument(name = "submit_contact", skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactPayload>,
) -> Response {
    if let Err(errors) = payload.validate() {
        warn!(field_count = errors.field_errors().len(), "Contact payload failed validation");
        return validation_error_response(&errors);
    }

    let record = ContactRecord::new(payload.name, payload.email, payload.message);

    let Some(store) = state.store.as_ref() else {
        info!("No store configured, contact submission accepted without persistence");
        return (StatusCode::OK, Json(ContactResponse { ok: true, id: None })).into_response();
    };

    let document = match serde_json::to_value(&record) {
        Ok(document) => document,
        Err(e) => {
            error!(error = %e, "Failed to serialize contact record");
            return create_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "serialization_failed",
                &format!("Failed to save contact: {e}"),
            );
        },
    };

    match store.create_document(RecordKind::Contact, document).await {
        Ok(id) => {
            info!(document_id = %id, "Contact submission stored");
            (StatusCode::OK, Json(ContactResponse { ok: true, id: Some(id.to_string()) }))
                .into_response()
        },
        Err(e) => {
            error!(error = %e, "Failed to persist contact submission");
            create_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "contact_write_failed",
                &format!("Failed to save contact: {e}"),
            )
        },
    }
}
