//! album-server binary
//!
//! Connects to MySQL, verifies the connection, then serves the album API
//! until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use album_server::config::Args;
use album_server::db::{self, AlbumRepo};
use album_server::http::run_server;
use album_server::tracing_setup::{self, TracingConfig};
use album_server::AlbumService;

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables win over it
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    tracing_setup::init(&TracingConfig { debug: args.debug })?;

    let store_config = args.store_config();
    tracing::info!(store = %store_config.address(), user = %store_config.user, "Connecting to the database");

    let pool = db::create_pool(store_config.connect_options(), store_config.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", store_config.address()))?;
    db::ping(&pool)
        .await
        .context("Database did not answer ping")?;
    tracing::info!("Connected to the database");

    let service = AlbumService::new(Arc::new(AlbumRepo::new(pool)));

    run_server(service, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
