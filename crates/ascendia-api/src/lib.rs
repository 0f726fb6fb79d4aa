//! Ascendia HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use ascendia_core::store::DocumentStore;

pub mod config;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, create_router_with_timeout, start_server};

/// Shared application state injected into every handler.
///
/// The store is optional by design: when absent, write-path handlers degrade
/// to "accepted but not stored" instead of failing at startup.
#[derive(Clone)]
pub struct AppState {
    /// Optional document persistence capability.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Environment presence flags surfaced by the diagnostics endpoint.
    pub env_flags: EnvFlags,
}

impl AppState {
    /// Creates application state from an optional store and env flags.
    pub fn new(store: Option<Arc<dyn DocumentStore>>, env_flags: EnvFlags) -> Self {
        Self { store, env_flags }
    }
}

/// Presence flags for the configuration environment variables.
///
/// Reported by diagnostics only; routing never branches on these beyond
/// store presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvFlags {
    /// Whether `DATABASE_URL` was set at startup.
    pub database_url_set: bool,
    /// Whether `DATABASE_NAME` was set at startup.
    pub database_name_set: bool,
}
