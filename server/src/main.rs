//! Event Space HTTP server.
//!
//! Booking API for event halls backed by `PostgreSQL`.

use anyhow::Context;
use event_space_postgres::PostgresEventStore;
use event_space_server::{Config, env_file, keep_alive, shutdown_signal};
use event_space_web::{AppState, build_router};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,event_space=debug,tower_http=debug,sqlx=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match env_file(dotenv) {
        Ok(Some(path)) => info!(path = %path.display(), "Loaded .env"),
        Ok(None) => {}
        Err(error) => warn!(%error, "Ignoring unreadable .env file"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Event Space server");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        postgres = ?config.postgres,
        bind = %config.server.bind_address(),
        keep_alive = config.keep_alive.is_some(),
        "Configuration loaded"
    );

    info!("Connecting to event store database...");
    let store = PostgresEventStore::connect(&config.postgres)
        .await
        .context("Failed to connect to PostgreSQL")?;
    store
        .migrate()
        .await
        .context("Failed to prepare the events table")?;
    info!("Event store connected");

    let keep_alive_task = config
        .keep_alive
        .clone()
        .map(|settings| keep_alive::spawn(reqwest::Client::new(), settings));

    let app = build_router(AppState::new(Arc::new(store.clone())));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutting down");
    if let Some(task) = keep_alive_task {
        task.abort();
    }
    store.pool().close().await;
    info!("Shutdown complete");

    Ok(())
}
