// ABOUTME: Typed domain records for cleaners, services, and bookings
// ABOUTME: Replaces dynamic document shapes with explicit per-collection types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Domain model types
//!
//! One record type per stored collection (`Cleaner`, `Booking`) plus the
//! embedded value types they carry. Embedded lists and sub-records have no
//! independent lifecycle; they are stored inline with their parent.

use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lower bound for a service duration in minutes
pub const MIN_SERVICE_DURATION_MINUTES: u32 = 10;
/// Upper bound for a service duration in minutes
pub const MAX_SERVICE_DURATION_MINUTES: u32 = 600;

/// Geographic point with optional human-readable labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Human readable address
    #[serde(default)]
    pub address: Option<String>,
    /// City or area name
    #[serde(default)]
    pub city: Option<String>,
}

/// Booking location where lat/lng may be absent (customer gave address only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingLocation {
    /// Latitude, when provided
    pub lat: Option<f64>,
    /// Longitude, when provided
    pub lng: Option<f64>,
    /// Human readable address
    pub address: Option<String>,
}

/// Whether a provider is an individual or a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// A single person offering services
    #[default]
    Individual,
    /// A registered business
    Company,
}

impl ProviderType {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "company" => Self::Company,
            _ => Self::Individual,
        }
    }
}

/// A named, priced offering belonging to one cleaner
///
/// The name is unique within a cleaner's service list, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    /// Service name, e.g. "Exterior Wash"
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Price for this service (>= 0)
    pub price: f64,
    /// Estimated duration in minutes (10-600)
    pub duration_minutes: u32,
}

/// A service provider offering one or more priced, timed services at a location
///
/// Cleaner records are created via seeding or an external admin process and
/// are read-only from this core's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cleaner {
    /// Unique identifier
    pub id: Uuid,
    /// Cleaner full name or business name
    pub name: String,
    /// Whether this provider is an individual or a company
    #[serde(default)]
    pub provider_type: ProviderType,
    /// Contact phone number
    pub phone: Option<String>,
    /// Short profile/bio
    pub bio: Option<String>,
    /// Profile photo URL
    pub photo_url: Option<String>,
    /// Average rating 0-5
    pub rating: f64,
    /// Total number of reviews
    pub total_reviews: u32,
    /// Availability flag
    pub is_available: bool,
    /// Current service location
    pub location: GeoLocation,
    /// Offered services, in display order
    pub services: Vec<ServiceOption>,
    /// Flat fee added to every booking regardless of service chosen (>= 0)
    pub base_callout_fee: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Cleaner {
    /// Find a service by exact, case-sensitive name; first match wins
    #[must_use]
    pub fn find_service(&self, service_name: &str) -> Option<&ServiceOption> {
        self.services.iter().find(|s| s.name == service_name)
    }
}

/// Fields needed to create a cleaner (seeding/admin path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCleanerRequest {
    /// Cleaner full name or business name
    pub name: String,
    /// Provider type, defaults to individual
    #[serde(default)]
    pub provider_type: ProviderType,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Short profile/bio
    #[serde(default)]
    pub bio: Option<String>,
    /// Profile photo URL
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Average rating 0-5
    pub rating: f64,
    /// Total number of reviews
    pub total_reviews: u32,
    /// Availability flag
    pub is_available: bool,
    /// Current service location
    pub location: GeoLocation,
    /// Offered services
    pub services: Vec<ServiceOption>,
    /// Flat callout fee (>= 0)
    pub base_callout_fee: f64,
}

impl CreateCleanerRequest {
    /// Check field bounds before persistence
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the rating, a price, the callout fee,
    /// or a service duration is outside its documented bounds.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Rating must be between 0 and 5, got {}", self.rating),
            ));
        }
        if self.base_callout_fee < 0.0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "Callout fee must not be negative",
            ));
        }
        for service in &self.services {
            if service.price < 0.0 {
                return Err(AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("Service '{}' has a negative price", service.name),
                ));
            }
            if !(MIN_SERVICE_DURATION_MINUTES..=MAX_SERVICE_DURATION_MINUTES)
                .contains(&service.duration_minutes)
            {
                return Err(AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!(
                        "Service '{}' duration must be between {MIN_SERVICE_DURATION_MINUTES} and {MAX_SERVICE_DURATION_MINUTES} minutes",
                        service.name
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Customer contact details embedded in a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCustomer {
    /// Customer name
    pub name: String,
    /// Customer phone
    pub phone: String,
    /// Customer email, when provided
    #[serde(default)]
    pub email: Option<String>,
}

/// Optional car details embedded in a booking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDetails {
    /// Car make
    pub make: Option<String>,
    /// Car model
    pub model: Option<String>,
    /// Car color
    pub color: Option<String>,
    /// License plate
    pub plate: Option<String>,
}

impl CarDetails {
    /// Whether no field was supplied at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none() && self.color.is_none() && self.plate.is_none()
    }
}

/// Booking lifecycle status
///
/// Only `pending` is assigned by this core; transitions are driven by
/// out-of-scope processes (payment webhook, admin action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation (initial state)
    #[default]
    Pending,
    /// Confirmed by the cleaner or payment flow
    Confirmed,
    /// Service was carried out
    Completed,
    /// Cancelled before completion
    Cancelled,
}

impl BookingStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// Payment state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment received (initial state)
    #[default]
    Unpaid,
    /// Payment captured
    Paid,
    /// Payment returned to the customer
    Refunded,
}

impl PaymentStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "paid" => Self::Paid,
            "refunded" => Self::Refunded,
            _ => Self::Unpaid,
        }
    }
}

/// A customer's reservation of one cleaner's service at a scheduled time
///
/// Pricing fields are fixed at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: Uuid,
    /// Reference to the cleaner's identity (opaque string copy)
    pub cleaner_id: String,
    /// Chosen service name (denormalized copy, not a live reference)
    pub service_name: String,
    /// Price of the chosen service at booking time (>= 0)
    pub service_price: f64,
    /// Scheduled start time
    pub scheduled_time: String,
    /// Where the service takes place
    pub location: BookingLocation,
    /// Customer contact details
    pub customer: BookingCustomer,
    /// Car details, when provided
    pub car: Option<CarDetails>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Total price including callout fee (>= 0)
    pub total_price: f64,
    /// Platform commission rate applied at creation
    pub commission_rate: f64,
    /// Commission amount (>= 0)
    pub commission_amount: f64,
    /// Net amount to the cleaner after commission (>= 0)
    pub net_amount: f64,
    /// Lifecycle status
    pub status: BookingStatus,
    /// Payment state
    pub payment_status: PaymentStatus,
    /// External payment reference, when paid
    pub payment_reference: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
