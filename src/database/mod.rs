// ABOUTME: Database management for the Shinehub marketplace store
// ABOUTME: Owns the SQLite pool, schema migrations, and per-collection managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! # Database Management
//!
//! SQLite-backed storage with one table per former document collection.
//! The pool is created once at startup and shared across request handlers;
//! availability is probed before each operation so store outages surface as
//! `ServiceUnavailable` instead of an opaque driver error.

/// Booking storage operations
pub mod bookings;
/// Cleaner catalog storage operations
pub mod cleaners;

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub use bookings::BookingsManager;
pub use cleaners::CleanersManager;

/// Database manager for cleaner and booking storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns `ServiceUnavailable` when the store cannot be reached
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory SQLite gives every pooled connection its own database;
        // a single connection keeps the schema visible to all operations.
        let pool = if connection_options.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&connection_options)
                .await
        } else {
            SqlitePool::connect(&connection_options).await
        }
        .map_err(|e| AppError::service_unavailable(format!("Database not reachable: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        // Cleaner catalog. Embedded values (location, services) are stored as
        // JSON text columns; services carry their display order in the array.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS cleaners (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                provider_type TEXT NOT NULL DEFAULT 'individual',
                phone TEXT,
                bio TEXT,
                photo_url TEXT,
                rating REAL NOT NULL DEFAULT 4.8,
                total_reviews INTEGER NOT NULL DEFAULT 0,
                is_available INTEGER NOT NULL DEFAULT 1,
                location TEXT NOT NULL, -- JSON object
                services TEXT NOT NULL, -- JSON array
                base_callout_fee REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create cleaners table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bookings (
                id TEXT PRIMARY KEY,
                cleaner_id TEXT NOT NULL,
                service_name TEXT NOT NULL,
                service_price REAL NOT NULL,
                scheduled_time TEXT NOT NULL,
                location TEXT NOT NULL, -- JSON object
                customer TEXT NOT NULL, -- JSON object
                car TEXT,               -- JSON object
                notes TEXT,
                total_price REAL NOT NULL,
                commission_rate REAL NOT NULL,
                commission_amount REAL NOT NULL,
                net_amount REAL NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                payment_status TEXT NOT NULL DEFAULT 'unpaid',
                payment_reference TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bookings table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_cleaner_id ON bookings(cleaner_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create booking index: {e}")))?;

        Ok(())
    }

    /// Probe store availability before an operation
    ///
    /// # Errors
    ///
    /// Returns `ServiceUnavailable` when the probe query fails
    pub async fn check_available(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::service_unavailable(format!("Database not available: {e}")))
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cleaner catalog operations
    #[must_use]
    pub fn cleaners(&self) -> CleanersManager {
        CleanersManager::new(self.pool.clone())
    }

    /// Booking operations
    #[must_use]
    pub fn bookings(&self) -> BookingsManager {
        BookingsManager::new(self.pool.clone())
    }
}
