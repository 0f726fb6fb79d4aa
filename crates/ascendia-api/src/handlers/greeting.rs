//! Static greeting endpoints used as smoke checks.

use axum::Json;
use serde::Serialize;

/// Greeting response body.
#[derive(Debug, Serialize)]
pub struct Greeting {
    /// Static greeting text
    pub message: String,
}

/// GET `/` root greeting.
pub async fn root_greeting() -> Json<Greeting> {
    Json(Greeting { message: "Hello from the Ascendia backend!".to_string() })
}

/// GET `/api/hello` API greeting.
pub async fn api_greeting() -> Json<Greeting> {
    Json(Greeting { message: "Hello from the backend API!".to_string() })
}
