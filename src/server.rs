//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::domain::store::KvStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Opens the store selected by the configuration.
///
/// Redis is the primary store, so a failed connection is fatal. Without a
/// Redis URL the in-memory store is used.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, links are kept in memory and lost on restart");
            Ok(Arc::new(MemoryStore::new(Arc::new(SystemClock))))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis or in-memory)
/// - Link and access services
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Redis connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let state = AppState::new(store, Arc::new(SystemClock), &config);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! { _ = ctrl_c => {}, _ = terminate => {}, }
    tracing::info!("Shutdown signal received");
}
