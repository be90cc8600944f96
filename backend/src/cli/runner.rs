//! Execution of the `serve` and `seed` commands.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::storage::{self, seed};

/// Build the configured store, seed it if enabled, and serve HTTP until shutdown.
pub async fn run_serve(config: Config) -> Result<()> {
    let store = storage::from_config(&config).await?;

    if config.seed_on_startup {
        seed::seed_store(store.as_ref(), false).await?;
    }

    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!(
        backend = store.backend_name(),
        config = ?config,
        "Starting resource hub"
    );

    let state = Arc::new(AppState::new(config, store));
    let app = api::routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Seed the configured store and exit.
pub async fn run_seed(config: Config, reset: bool) -> Result<()> {
    let store = storage::from_config(&config).await?;
    let inserted = seed::seed_store(store.as_ref(), reset).await?;
    tracing::info!(
        backend = store.backend_name(),
        inserted = inserted.len(),
        reset,
        "Seed complete"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
