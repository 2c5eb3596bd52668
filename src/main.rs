// ABOUTME: Entry point for the roster binary.
// ABOUTME: Loads configuration, initializes tracing, recreates the database file, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use roster_server::{AppState, RosterConfig, create_router};
use roster_store::{StorageFile, StudentStore};

/// Student roster HTTP service.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about)]
struct Args {
    /// Socket address to listen on (overrides ROSTER_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// SQLite file to recreate and serve from (overrides ROSTER_DB_PATH)
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "roster=debug,roster_server=debug,roster_store=debug,tower_http=debug",
                )
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = RosterConfig::from_env().context("invalid configuration")?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(db_path) = args.db_path {
        config.db_path = db_path;
    }

    let file = StorageFile::recreate(&config.db_path)
        .context("could not prepare the database file")?;
    let store = StudentStore::new(file.path()).with_busy_timeout(config.busy_timeout);
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("starting server at {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("roster shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
