// ABOUTME: Entry point for the blogd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the store, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use blogd_server::{AppState, BlogdConfig, create_router};
use blogd_store::BlogStore;
use clap::Parser;

/// Minimal blog CRUD HTTP service backed by an embedded SQLite store.
#[derive(Debug, Parser)]
#[command(name = "blogd", version)]
struct Cli {
    /// Socket address to bind (overrides BLOGD_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Path to the SQLite database file (overrides BLOGD_DB)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = BlogdConfig::from_env().context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let store = BlogStore::open(&config.db_path)
        .with_context(|| format!("opening store at {}", config.db_path.display()))?;
    tracing::info!("store open at {}", config.db_path.display());

    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("blogd listening on {}", config.bind);

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
