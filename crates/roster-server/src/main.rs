//! ROSTER Server — application entry point.

use clap::Parser;
use roster_server::api;
use roster_server::config::Config;
use roster_server::state::AppState;
use tracing_subscriber::EnvFilter;

/// Wait for shutdown signal (SIGTERM or Ctrl+C).
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("roster_server=info".parse()?)
                .add_directive("roster_db=info".parse()?),
        )
        .json()
        .init();

    let config = Config::parse();

    tracing::info!("Starting ROSTER server...");

    let manager = roster_db::DbManager::connect(&config.db_config()).await?;
    roster_db::run_migrations(manager.client()).await?;

    let state = AppState::new(manager.client().clone());
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ROSTER server stopped.");
    Ok(())
}
