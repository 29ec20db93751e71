// ABOUTME: Route handlers for the cleaner catalog REST API
// ABOUTME: Serves the unfiltered cleaner listing used by customers to pick a provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Cleaner catalog routes

use crate::errors::AppError;
use crate::models::{Cleaner, GeoLocation, ServiceOption};
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Query parameters for the catalog listing
///
/// Accepted for client compatibility but not applied: the catalog is served
/// unfiltered and geo-filtering is a documented gap.
#[derive(Debug, Deserialize, Default)]
pub struct NearbyQuery {
    /// Latitude of the search center
    pub lat: Option<f64>,
    /// Longitude of the search center
    pub lng: Option<f64>,
    /// Search radius in kilometers
    pub radius_km: Option<f64>,
}

/// Projection of a cleaner for catalog responses
///
/// `photo_url` and `bio` are always present, serialized as null when absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanerResponse {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Provider type (individual or company)
    pub provider_type: String,
    /// Average rating 0-5
    pub rating: f64,
    /// Total number of reviews
    pub total_reviews: u32,
    /// Availability flag
    pub is_available: bool,
    /// Profile photo URL (null when absent, never omitted)
    pub photo_url: Option<String>,
    /// Short profile/bio (null when absent, never omitted)
    pub bio: Option<String>,
    /// Offered services, verbatim
    pub services: Vec<ServiceOption>,
    /// Service location, verbatim
    pub location: GeoLocation,
    /// Flat callout fee, verbatim
    pub base_callout_fee: f64,
}

impl From<Cleaner> for CleanerResponse {
    fn from(cleaner: Cleaner) -> Self {
        Self {
            id: cleaner.id.to_string(),
            name: cleaner.name,
            provider_type: cleaner.provider_type.as_str().to_owned(),
            rating: cleaner.rating,
            total_reviews: cleaner.total_reviews,
            is_available: cleaner.is_available,
            photo_url: cleaner.photo_url,
            bio: cleaner.bio,
            services: cleaner.services,
            location: cleaner.location,
            base_callout_fee: cleaner.base_callout_fee,
        }
    }
}

/// Cleaner catalog routes handler
pub struct CleanerRoutes;

impl CleanerRoutes {
    /// Create all cleaner catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/cleaners", get(Self::handle_list))
            .with_state(resources)
    }

    /// Handle GET /cleaners - list every stored cleaner
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<NearbyQuery>,
    ) -> Result<Response, AppError> {
        resources.database.check_available().await?;

        if query.lat.is_some() || query.lng.is_some() || query.radius_km.is_some() {
            // Geo params are accepted but filtering is not implemented
            debug!(
                lat = ?query.lat,
                lng = ?query.lng,
                radius_km = ?query.radius_km,
                "Geo parameters received; returning unfiltered catalog"
            );
        }

        let cleaners = resources.database.cleaners().list().await?;
        let response: Vec<CleanerResponse> = cleaners.into_iter().map(Into::into).collect();

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
