//! Diagnostics endpoint for operational visibility.
//!
//! Contract: always returns 200, never raises. Every store probing error is
//! caught and summarized inline as a truncated message string.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::AppState;

/// Maximum characters of a probing error reported inline.
const ERROR_SUMMARY_CHARS: usize = 50;

/// Maximum collection names listed.
const MAX_COLLECTIONS: usize = 10;

/// Diagnostics report returned by GET `/test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    /// Backend-up flag, always "running" when the request is reached
    pub backend: &'static str,
    /// Store availability: "not available", "connected", or a summarized
    /// probing failure
    pub database: String,
    /// "connected" or "not connected"
    pub connection_status: &'static str,
    /// Store name, when resolvable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Up to 10 collection names, when listable
    pub collections: Vec<String>,
    /// Whether `DATABASE_URL` was set at startup
    pub database_url_set: bool,
    /// Whether `DATABASE_NAME` was set at startup
    pub database_name_set: bool,
}

/// Reports service and store health without mutating state.
///
/// Probes the store for its name and collection listing; any error is
/// folded into the `database` field rather than propagated, so this
/// endpoint cannot fail.
#[instrument(name = "diagnostics", skip(state))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running",
        database: "not available".to_string(),
        connection_status: "not connected",
        database_name: None,
        collections: Vec::new(),
        database_url_set: state.env_flags.database_url_set,
        database_name_set: state.env_flags.database_name_set,
    };

    if let Some(store) = state.store.as_ref() {
        response.database = "connected".to_string();
        response.connection_status = "connected";
        response.database_name = Some(store.name().to_string());

        match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                response.collections = names;
            },
            Err(e) => {
                response.database =
                    format!("connected, listing failed: {}", summarize_error(&e.to_string()));
            },
        }
    }

    debug!(database = %response.database, "Diagnostics probe completed");
    Json(response)
}

/// Truncates an error message to at most 50 characters.
fn summarize_error(message: &str) -> String {
    message.chars().take(ERROR_SUMMARY_CHARS).collect()
}
