// ABOUTME: Shared test fixtures for database and route integration tests
// ABOUTME: Provides an in-memory store, server resources, and a catalog fixture

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, dead_code)]

use shinehub::config::environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, LogLevel, ServerConfig,
};
use shinehub::database::Database;
use shinehub::models::{Cleaner, CreateCleanerRequest, GeoLocation, ProviderType, ServiceOption};
use shinehub::server::ServerResources;
use std::sync::Arc;

/// Create a migrated in-memory test database
pub async fn create_test_database() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

/// Build server resources around an in-memory database
pub async fn create_test_server_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    let config = test_config();
    Arc::new(ServerResources::new(database, Arc::new(config)))
}

/// Configuration matching the in-memory test store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

/// Fixture cleaner offering a cheap and a premium service
pub fn test_cleaner_request() -> CreateCleanerRequest {
    CreateCleanerRequest {
        name: "Sparkle Pro Detailing".into(),
        provider_type: ProviderType::Company,
        phone: Some("+1-555-0110".into()),
        bio: Some("Premium mobile car wash & detailing".into()),
        photo_url: None,
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
                name: "Full Detail".into(),
                description: Some("In & Out premium detail".into()),
                price: 99.0,
                duration_minutes: 120,
            },
        ],
        base_callout_fee: 5.0,
    }
}

/// Insert the fixture cleaner and return the stored record
pub async fn create_test_cleaner(database: &Database) -> Cleaner {
    database
        .cleaners()
        .create(&test_cleaner_request())
        .await
        .unwrap()
}
