// ABOUTME: Service root and health check route handlers
// ABOUTME: Reports service status and a live database availability probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Health check routes
//!
//! `GET /` is a running-service banner; `GET /health` adds a database
//! reachability probe for monitoring and load balancer checks.

use crate::server::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the root and health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET / - running-service banner
    async fn handle_root() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Shinehub marketplace API running"
        }))
    }

    /// Handle GET /health - status plus database probe
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let database_available = resources.database.check_available().await.is_ok();

        Json(serde_json::json!({
            "status": if database_available { "healthy" } else { "degraded" },
            "database": database_available,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
