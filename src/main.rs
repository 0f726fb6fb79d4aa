//! Ascendia backend service.
//!
//! Main entry point. Loads configuration, connects the optional document
//! store, and serves the HTTP API. A missing or unreachable store is not
//! fatal: the service starts anyway and write paths degrade to
//! acknowledgement-only behavior.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use ascendia_api::{AppState, Config, EnvFlags};
use ascendia_core::store::{DocumentStore, PgDocumentStore};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting Ascendia backend service");

    let config = Config::load()?;
    info!(
        database_url = %config.database_url_masked(),
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    let env_flags = EnvFlags {
        database_url_set: config.database_url.is_some(),
        database_name_set: config.database_name.is_some(),
    };

    let store = connect_store(&config).await;
    let state = AppState::new(store, env_flags);

    let addr = config.parse_server_addr()?;
    ascendia_api::start_server(state, addr, config.request_timeout_duration())
        .await
        .context("Server failed")?;

    info!("Ascendia shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,ascendia=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Connects the document store when `DATABASE_URL` is configured.
///
/// Any connection or schema failure downgrades to running without
/// persistence, logged at warn. The diagnostics endpoint reports the
/// resulting state either way.
async fn connect_store(config: &Config) -> Option<Arc<dyn DocumentStore>> {
    let Some(url) = config.database_url.as_deref() else {
        info!("No DATABASE_URL configured, running without persistence");
        return None;
    };

    match create_store(config, url).await {
        Ok(store) => {
            info!("Document store connected");
            Some(store)
        },
        Err(e) => {
            warn!(error = %e, "Document store unavailable, running without persistence");
            None
        },
    }
}

/// Creates the connection pool, verifies it, and ensures the schema.
async fn create_store(config: &Config, url: &str) -> Result<Arc<dyn DocumentStore>> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect(url)
        .await
        .context("Failed to create database connection pool")?;

    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Failed to verify database connection")?;

    let database_name = config.database_name.clone().unwrap_or_else(|| "ascendia".to_string());

    let store = PgDocumentStore::new(pool, database_name);
    store.ensure_schema().await.context("Failed to ensure document schema")?;

    Ok(Arc::new(store))
}
