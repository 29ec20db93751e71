// ABOUTME: Centralized resource container and HTTP server assembly
// ABOUTME: Owns the shared database handle and merges all domain routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. The store handle
//! is constructed once by the process entry point and shared by every
//! handler, replacing any notion of global mutable state.

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::cors::setup_cors;
use crate::routes::{AdminRoutes, BookingRoutes, CleanerRoutes, HealthRoutes};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Shared database handle, initialized once at startup
    pub database: Arc<Database>,
    /// Runtime configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}

/// The marketplace HTTP server
pub struct MarketplaceServer {
    resources: Arc<ServerResources>,
}

impl MarketplaceServer {
    /// Create a new server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router with middleware layers
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(CleanerRoutes::routes(self.resources.clone()))
            .merge(BookingRoutes::routes(self.resources.clone()))
            .merge(AdminRoutes::routes(self.resources.clone()))
            .layer(setup_cors(&self.resources.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(&self, port: u16) -> Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        info!("Listening on 0.0.0.0:{port}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
