// ABOUTME: Database operations for the cleaner catalog
// ABOUTME: Handles insert and lookup of cleaner records with embedded services and location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

use crate::errors::{AppError, AppResult};
use crate::models::{Cleaner, CreateCleanerRequest, GeoLocation, ProviderType, ServiceOption};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Cleaner catalog operations manager
pub struct CleanersManager {
    pool: SqlitePool,
}

impl CleanersManager {
    /// Create a new cleaners manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new cleaner record (seeding/admin path)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a field fails validation, or an error
    /// if the database operation fails
    pub async fn create(&self, request: &CreateCleanerRequest) -> AppResult<Cleaner> {
        request.validate()?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let location_json = serde_json::to_string(&request.location)?;
        let services_json = serde_json::to_string(&request.services)?;

        sqlx::query(
            r"
            INSERT INTO cleaners (
                id, name, provider_type, phone, bio, photo_url, rating,
                total_reviews, is_available, location, services,
                base_callout_fee, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            ",
        )
        .bind(id.to_string())
        .bind(&request.name)
        .bind(request.provider_type.as_str())
        .bind(&request.phone)
        .bind(&request.bio)
        .bind(&request.photo_url)
        .bind(request.rating)
        .bind(i64::from(request.total_reviews))
        .bind(i64::from(request.is_available))
        .bind(&location_json)
        .bind(&services_json)
        .bind(request.base_callout_fee)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create cleaner: {e}")))?;

        Ok(Cleaner {
            id,
            name: request.name.clone(),
            provider_type: request.provider_type,
            phone: request.phone.clone(),
            bio: request.bio.clone(),
            photo_url: request.photo_url.clone(),
            rating: request.rating,
            total_reviews: request.total_reviews,
            is_available: request.is_available,
            location: request.location.clone(),
            services: request.services.clone(),
            base_callout_fee: request.base_callout_fee,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a cleaner by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, cleaner_id: Uuid) -> AppResult<Option<Cleaner>> {
        let row = sqlx::query(
            r"
            SELECT id, name, provider_type, phone, bio, photo_url, rating,
                   total_reviews, is_available, location, services,
                   base_callout_fee, created_at, updated_at
            FROM cleaners
            WHERE id = $1
            ",
        )
        .bind(cleaner_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get cleaner: {e}")))?;

        row.map(|r| row_to_cleaner(&r)).transpose()
    }

    /// List every stored cleaner, unfiltered, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Cleaner>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, provider_type, phone, bio, photo_url, rating,
                   total_reviews, is_available, location, services,
                   base_callout_fee, created_at, updated_at
            FROM cleaners
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list cleaners: {e}")))?;

        rows.iter().map(row_to_cleaner).collect()
    }

    /// Count stored cleaners
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM cleaners")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count cleaners: {e}")))?;

        Ok(row.get("count"))
    }

    /// Delete every cleaner (used by the seeder's --reset flag)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM cleaners")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete cleaners: {e}")))?;

        Ok(result.rows_affected())
    }
}

/// Convert a database row to a `Cleaner`
fn row_to_cleaner(row: &SqliteRow) -> AppResult<Cleaner> {
    let id_str: String = row.get("id");
    let provider_type_str: String = row.get("provider_type");
    let location_json: String = row.get("location");
    let services_json: String = row.get("services");
    let total_reviews: i64 = row.get("total_reviews");
    let is_available: i64 = row.get("is_available");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let location: GeoLocation = serde_json::from_str(&location_json)?;
    let services: Vec<ServiceOption> = serde_json::from_str(&services_json)?;

    Ok(Cleaner {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        name: row.get("name"),
        provider_type: ProviderType::parse(&provider_type_str),
        phone: row.get("phone"),
        bio: row.get("bio"),
        photo_url: row.get("photo_url"),
        rating: row.get("rating"),
        total_reviews: total_reviews as u32,
        is_available: is_available == 1,
        location,
        services,
        base_callout_fee: row.get("base_callout_fee"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
