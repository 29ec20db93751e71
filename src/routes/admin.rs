// ABOUTME: Administrative route handlers (demo data seeding)
// ABOUTME: Populates the catalog with demo cleaners on first run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Administrative routes

use crate::errors::AppError;
use crate::seed::seed_demo_cleaners;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for a seed request
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Whether any cleaners were inserted
    pub seeded: bool,
    /// Number of cleaners inserted
    pub count: u32,
    /// Human-readable outcome
    pub message: String,
}

/// Admin routes handler
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/seed", post(Self::handle_seed))
            .with_state(resources)
    }

    /// Handle POST /seed - populate demo cleaners if none exist
    async fn handle_seed(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        resources.database.check_available().await?;

        let outcome = seed_demo_cleaners(&resources.database).await?;

        let message = if outcome.seeded {
            format!("Seeded {} demo cleaners", outcome.count)
        } else {
            "Cleaners already exist".to_owned()
        };

        let response = SeedResponse {
            seeded: outcome.seeded,
            count: outcome.count,
            message,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
