// ABOUTME: Server binary for the Shinehub marketplace API
// ABOUTME: Loads configuration, initializes logging and storage, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! # Shinehub API Server Binary
//!
//! Starts the marketplace HTTP API with environment-driven configuration,
//! structured logging, and a SQLite-backed store.

use anyhow::Result;
use clap::Parser;
use shinehub::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{MarketplaceServer, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "shinehub-server")]
#[command(about = "Shinehub - mobile car-cleaning marketplace API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Shinehub marketplace API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized and migrated");

    let resources = Arc::new(ServerResources::new(database, Arc::new(config.clone())));
    let server = MarketplaceServer::new(resources);

    info!("Server starting on port {}", config.http_port);
    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
