// ABOUTME: Route module organization for Shinehub HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Route module for the marketplace API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the database managers and pricing logic.

/// Administrative routes (demo seeding)
pub mod admin;
/// Booking creation and listing routes
pub mod bookings;
/// Cleaner catalog routes
pub mod cleaners;
/// Service root and health check routes
pub mod health;

/// Admin route handlers
pub use admin::AdminRoutes;
/// Booking route handlers
pub use bookings::BookingRoutes;
/// Cleaner catalog route handlers
pub use cleaners::CleanerRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
