//! HTTP request handlers for the Ascendia API.
//!
//! Every write-path handler follows the same single-pass shape: validate the
//! payload, build a tagged record, attempt an optional store write, respond.
//! No handler has intermediate states, retries, or pending phases.
//!
//! # Error Handling
//!
//! Validation failures are the only input-side errors exposed to callers
//! (422 with per-field diagnostics). Persistence failures are surfaced for
//! contact submissions only; checkout and analytics deliberately swallow
//! them so telemetry paths never break user flows. The asymmetry is a
//! design decision, not an accident, and each handler carries its own
//! policy.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

pub mod analytics;
pub mod checkout;
pub mod contact;
pub mod diagnostics;
pub mod greeting;

pub use analytics::track_event;
pub use checkout::create_checkout;
pub use contact::submit_contact;
pub use diagnostics::diagnostics;
pub use greeting::{api_greeting, root_greeting};

/// JSON body extractor whose rejection carries the structured error
/// envelope.
///
/// Axum's stock `Json` rejection replies with a plain-text body, but the
/// API contract promises `{error: {code, message, ...}}` for every
/// malformed, missing, or out-of-range input. Every write-path handler
/// takes its payload through this wrapper so a missing field and an
/// out-of-range field reject the same way: 422 with a JSON envelope,
/// before any handler logic runs.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(Self(payload)),
            Err(rejection) => Err(malformed_body_response(&rejection)),
        }
    }
}

/// Builds the 422 envelope for a body that never reached validation.
///
/// Unparseable JSON and schema mismatches are both "unprocessable" to
/// callers, so the extractor's status is collapsed to 422 regardless of
/// the rejection variant.
fn malformed_body_response(rejection: &JsonRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: ErrorDetail {
                code: "validation_failed".to_string(),
                message: rejection.body_text(),
                fields: None,
            },
        }),
    )
        .into_response()
}

/// Error response envelope with code and message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details including code, message, and optional field diagnostics
    pub error: ErrorDetail,
}

/// Detailed error information.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error description
    pub message: String,
    /// Per-field validation diagnostics, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

/// Builds a non-validation error response.
pub(crate) fn create_error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
                fields: None,
            },
        }),
    )
        .into_response()
}

/// Builds a 422 response carrying per-field validation diagnostics.
///
/// Serializes the full `ValidationErrors` structure so clients see which
/// fields failed and why. Reached before any store interaction.
pub(crate) fn validation_error_response(errors: &ValidationErrors) -> Response {
    let fields = serde_json::to_value(errors).unwrap_or(Value::Null);

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: ErrorDetail {
                code: "validation_failed".to_string(),
                message: "Request payload failed validation".to_string(),
                fields: Some(fields),
            },
        }),
    )
        .into_response()
}
