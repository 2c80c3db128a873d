//! cpvault - Application Entry Point
//!
//! This is the main entry point for the cpvault server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpvault::{config::Config, create_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.server.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting cpvault server...");
    tracing::info!(
        root = %config.content.root.display(),
        layout = %config.content.layout,
        "Serving content tree"
    );
    if !config.content.root.is_dir() {
        tracing::warn!(
            root = %config.content.root.display(),
            "Content root does not exist; every lookup will return 404"
        );
    }

    // Create application state
    let state = AppState::new(config);

    let addr = SocketAddr::new(
        state.config().server.host.parse()?,
        state.config().server.port,
    );

    // Build the router
    let app = create_router(state);

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
