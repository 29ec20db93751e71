// ABOUTME: Demo cleaner fixtures for first-run seeding
// ABOUTME: Shared by the POST /seed endpoint and the seed-demo-data binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Demo data seeding
//!
//! Populates the catalog with a small set of demo cleaners so a fresh
//! deployment has something to browse. Seeding is skipped whenever any
//! cleaner already exists.

use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{CreateCleanerRequest, GeoLocation, ProviderType, ServiceOption};
use tracing::info;

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy)]
pub struct SeedOutcome {
    /// Whether any cleaners were inserted
    pub seeded: bool,
    /// Number of cleaners inserted
    pub count: u32,
}

/// The demo cleaner fixtures
#[must_use]
pub fn demo_cleaners() -> Vec<CreateCleanerRequest> {
    vec![
        CreateCleanerRequest {
            name: "Sparkle Pro Detailing".into(),
            provider_type: ProviderType::Company,
            phone: Some("+1-555-0110".into()),
            bio: Some("Premium mobile car wash & detailing".into()),
            photo_url: Some(
                "https://images.unsplash.com/photo-1609137144813-7d9921338f9b?w=800".into(),
            ),
            rating: 4.9,
            total_reviews: 128,
            is_available: true,
            location: GeoLocation {
                lat: 37.773_972,
                lng: -122.431_297,
                address: Some("San Francisco, CA".into()),
                city: None,
            },
            services: vec![
                ServiceOption {
                    name: "Exterior Wash".into(),
                    description: Some("Foam wash & dry".into()),
                    price: 25.0,
                    duration_minutes: 30,
                },
                ServiceOption {
                    name: "Interior Clean".into(),
                    description: Some("Vacuum & wipe down".into()),
                    price: 35.0,
                    duration_minutes: 45,
                },
                ServiceOption {
                    name: "Full Detail".into(),
                    description: Some("In & Out premium detail".into()),
                    price: 99.0,
                    duration_minutes: 120,
                },
            ],
            base_callout_fee: 5.0,
        },
        CreateCleanerRequest {
            name: "EcoShine Mobile".into(),
            provider_type: ProviderType::Individual,
            phone: Some("+1-555-0111".into()),
            bio: Some("Waterless eco-friendly clean".into()),
            photo_url: Some(
                "https://images.unsplash.com/photo-1515923162031-1d7cfbca8b89?w=800".into(),
            ),
            rating: 4.7,
            total_reviews: 76,
            is_available: true,
            location: GeoLocation {
                lat: 37.784,
                lng: -122.409,
                address: Some("SoMa, SF".into()),
                city: None,
            },
            services: vec![
                ServiceOption {
                    name: "Quick Wash".into(),
                    description: Some("15-min express".into()),
                    price: 15.0,
                    duration_minutes: 15,
                },
                ServiceOption {
                    name: "Interior Refresh".into(),
                    description: Some("Vacuum & mats".into()),
                    price: 25.0,
                    duration_minutes: 25,
                },
            ],
            base_callout_fee: 3.0,
        },
    ]
}

/// Insert the demo cleaners unless the catalog already has entries
///
/// # Errors
///
/// Returns an error if the database is unavailable or an insert fails
pub async fn seed_demo_cleaners(database: &Database) -> AppResult<SeedOutcome> {
    let cleaners = database.cleaners();

    if cleaners.count().await? > 0 {
        info!("Cleaners already exist, skipping seed");
        return Ok(SeedOutcome {
            seeded: false,
            count: 0,
        });
    }

    let fixtures = demo_cleaners();
    let mut count = 0u32;
    for fixture in &fixtures {
        let cleaner = cleaners.create(fixture).await?;
        info!(cleaner_id = %cleaner.id, name = %cleaner.name, "Seeded demo cleaner");
        count += 1;
    }

    Ok(SeedOutcome {
        seeded: true,
        count,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Test assertions with exact literal float values

    use super::*;

    #[test]
    fn test_demo_fixtures_shape() {
        let fixtures = demo_cleaners();
        assert_eq!(fixtures.len(), 2);

        let sparkle = &fixtures[0];
        assert_eq!(sparkle.services.len(), 3);
        assert_eq!(sparkle.base_callout_fee, 5.0);
        assert!(sparkle
            .services
            .iter()
            .any(|s| s.name == "Exterior Wash" && s.price == 25.0));

        let ecoshine = &fixtures[1];
        assert_eq!(ecoshine.services.len(), 2);
        assert_eq!(ecoshine.base_callout_fee, 3.0);
    }
}
