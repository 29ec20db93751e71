// ABOUTME: Demo data seeder for the Shinehub marketplace
// ABOUTME: Populates the cleaner catalog with demo fixtures for first-run UX
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Demo data seeder.
//!
//! Usage:
//! ```bash
//! # Seed with the DATABASE_URL from the environment
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-data -- --database-url sqlite:data/shinehub.db
//!
//! # Wipe the catalog before seeding
//! cargo run --bin seed-demo-data -- --reset
//! ```

use anyhow::Result;
use clap::Parser;
use shinehub::{config::environment::ServerConfig, database::Database, logging, seed};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Shinehub demo data seeder",
    long_about = "Populate the cleaner catalog with demo fixtures for first-run testing"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing cleaners before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_from_env()?;

    let database_url = if let Some(url) = args.database_url {
        url
    } else {
        ServerConfig::from_env()?.database.url.to_connection_string()
    };

    info!("Seeding demo data into {database_url}");
    let database = Database::new(&database_url).await?;

    if args.reset {
        let removed = database.cleaners().delete_all().await?;
        info!("Removed {removed} existing cleaners");
    }

    let outcome = seed::seed_demo_cleaners(&database).await?;
    if outcome.seeded {
        info!("Seeded {} demo cleaners", outcome.count);
    } else {
        info!("Catalog already populated, nothing to do");
    }

    Ok(())
}
