//! # Tienda API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Server                                     │
//! │                                                                         │
//! │  Browser (localhost:8001) ───► HTTP (8080) ───► Services ───► Store    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tienda_api::{routes, ApiConfig, AppState};
use tienda_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Tienda API server...");

    // Load configuration
    let config = ApiConfig::load().context("Failed to load configuration")?;
    info!(
        addr = %config.bind_addr(),
        origins = ?config.cors_allowed_origins,
        "Configuration loaded"
    );

    // Create shared state
    let state = AppState::new(Store::new());
    let app = routes::app(state, &config).context("Failed to build router")?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed, that branch never resolves and the
/// other one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
