//! fieldplan - Offshore field development case modeling service
//!
//! # Usage
//!
//! ```bash
//! # Run with built-in defaults (store in ./fieldplan_db, port 8080)
//! cargo run --release
//!
//! # Point at a specific config and store
//! ./fieldplan --config /etc/fieldplan.toml --db-path /var/lib/fieldplan
//! ```
//!
//! # Environment Variables
//!
//! - `FIELDPLAN_CONFIG`: Path to the TOML config file
//! - `FIELDPLAN_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use fieldplan::api::{create_app, AppState};
use fieldplan::config::{self, AppConfig};
use fieldplan::storage::Store;

#[derive(Parser, Debug)]
#[command(name = "fieldplan")]
#[command(about = "Offshore field development case modeling service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (e.g. "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Override the entity store path
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,

    /// Path to a TOML config file, bypassing the search order
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let app_config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load(),
    };
    config::init(app_config.clone());

    let db_path = args
        .db_path
        .unwrap_or_else(|| app_config.storage.db_path.clone());
    let store = Store::open(&db_path).context("failed to open entity store")?;

    let state = AppState::new(store, app_config.economics.clone());
    let app = create_app(state);

    let addr = args.addr.unwrap_or_else(|| app_config.server.addr());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await
        .context("server error")?;

    info!("graceful shutdown complete");
    Ok(())
}
