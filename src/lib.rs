// ABOUTME: Main library entry point for the Shinehub marketplace backend
// ABOUTME: Exposes catalog, booking, and pricing modules plus the HTTP server wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

#![deny(unsafe_code)]

//! # Shinehub
//!
//! A marketplace backend matching customers to mobile car-cleaning providers
//! ("cleaners"). A caller lists the cleaner catalog, picks a cleaner and one
//! of its services, and submits a booking; pricing is always fixed
//! server-side from the stored cleaner record.
//!
//! ## Architecture
//!
//! - **Models**: typed records for cleaners, services, and bookings
//! - **Pricing**: service lookup and commission math for booking creation
//! - **Database**: SQLite-backed store with one manager per collection
//! - **Routes**: axum HTTP handlers organized by domain
//! - **Server**: dependency-injected resource container and router assembly
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use shinehub::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Shinehub configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// SQLite-backed storage for cleaners and bookings
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Request middleware (CORS)
pub mod middleware;

/// Typed domain records for cleaners, services, and bookings
pub mod models;

/// Booking price computation and service resolution
pub mod pricing;

/// HTTP routes organized by domain
pub mod routes;

/// Demo cleaner fixtures for first-run seeding
pub mod seed;

/// Server resources and router assembly
pub mod server;
