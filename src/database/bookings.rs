// ABOUTME: Database operations for booking records
// ABOUTME: Handles the single-insert booking creation and unfiltered listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

use crate::errors::{AppError, AppResult};
use crate::models::{
    Booking, BookingCustomer, BookingLocation, BookingStatus, CarDetails, PaymentStatus,
};
use crate::pricing::BookingQuote;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Fields assembled by the booking handler before persistence
///
/// Pricing comes from a server-side [`BookingQuote`]; status fields are not
/// part of this request because every new booking starts out
/// pending/unpaid with no payment reference.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// Cleaner the booking is made against (opaque string reference)
    pub cleaner_id: String,
    /// Chosen service name (denormalized copy)
    pub service_name: String,
    /// Scheduled start time (ISO string, passed through)
    pub scheduled_time: String,
    /// Where the service takes place
    pub location: BookingLocation,
    /// Customer contact details
    pub customer: BookingCustomer,
    /// Car details, when provided
    pub car: Option<CarDetails>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Server-side price breakdown
    pub quote: BookingQuote,
}

/// Booking storage operations manager
pub struct BookingsManager {
    pool: SqlitePool,
}

impl BookingsManager {
    /// Create a new bookings manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new booking
    ///
    /// Single-document insert with no other side effects. The record always
    /// starts as `pending` / `unpaid` with no payment reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, new_booking: &NewBooking) -> AppResult<Booking> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let location_json = serde_json::to_string(&new_booking.location)?;
        let customer_json = serde_json::to_string(&new_booking.customer)?;
        let car_json = new_booking
            .car
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r"
            INSERT INTO bookings (
                id, cleaner_id, service_name, service_price, scheduled_time,
                location, customer, car, notes, total_price, commission_rate,
                commission_amount, net_amount, status, payment_status,
                payment_reference, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(id.to_string())
        .bind(&new_booking.cleaner_id)
        .bind(&new_booking.service_name)
        .bind(new_booking.quote.service_price)
        .bind(&new_booking.scheduled_time)
        .bind(&location_json)
        .bind(&customer_json)
        .bind(&car_json)
        .bind(&new_booking.notes)
        .bind(new_booking.quote.total_price)
        .bind(new_booking.quote.commission_rate)
        .bind(new_booking.quote.commission_amount)
        .bind(new_booking.quote.net_amount)
        .bind(BookingStatus::Pending.as_str())
        .bind(PaymentStatus::Unpaid.as_str())
        .bind(Option::<String>::None) // payment_reference
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create booking: {e}")))?;

        Ok(Booking {
            id,
            cleaner_id: new_booking.cleaner_id.clone(),
            service_name: new_booking.service_name.clone(),
            service_price: new_booking.quote.service_price,
            scheduled_time: new_booking.scheduled_time.clone(),
            location: new_booking.location.clone(),
            customer: new_booking.customer.clone(),
            car: new_booking.car.clone(),
            notes: new_booking.notes.clone(),
            total_price: new_booking.quote.total_price,
            commission_rate: new_booking.quote.commission_rate,
            commission_amount: new_booking.quote.commission_amount,
            net_amount: new_booking.quote.net_amount,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_reference: None,
            created_at: now,
        })
    }

    /// Get a booking by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, booking_id: Uuid) -> AppResult<Option<Booking>> {
        let row = sqlx::query(
            r"
            SELECT id, cleaner_id, service_name, service_price, scheduled_time,
                   location, customer, car, notes, total_price, commission_rate,
                   commission_amount, net_amount, status, payment_status,
                   payment_reference, created_at
            FROM bookings
            WHERE id = $1
            ",
        )
        .bind(booking_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get booking: {e}")))?;

        row.map(|r| row_to_booking(&r)).transpose()
    }

    /// List every stored booking, unfiltered, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query(
            r"
            SELECT id, cleaner_id, service_name, service_price, scheduled_time,
                   location, customer, car, notes, total_price, commission_rate,
                   commission_amount, net_amount, status, payment_status,
                   payment_reference, created_at
            FROM bookings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list bookings: {e}")))?;

        rows.iter().map(row_to_booking).collect()
    }
}

/// Convert a database row to a `Booking`
fn row_to_booking(row: &SqliteRow) -> AppResult<Booking> {
    let id_str: String = row.get("id");
    let location_json: String = row.get("location");
    let customer_json: String = row.get("customer");
    let car_json: Option<String> = row.get("car");
    let status_str: String = row.get("status");
    let payment_status_str: String = row.get("payment_status");
    let created_at_str: String = row.get("created_at");

    let location: BookingLocation = serde_json::from_str(&location_json)?;
    let customer: BookingCustomer = serde_json::from_str(&customer_json)?;
    let car: Option<CarDetails> = car_json.as_deref().map(serde_json::from_str).transpose()?;

    Ok(Booking {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        cleaner_id: row.get("cleaner_id"),
        service_name: row.get("service_name"),
        service_price: row.get("service_price"),
        scheduled_time: row.get("scheduled_time"),
        location,
        customer,
        car,
        notes: row.get("notes"),
        total_price: row.get("total_price"),
        commission_rate: row.get("commission_rate"),
        commission_amount: row.get("commission_amount"),
        net_amount: row.get("net_amount"),
        status: BookingStatus::parse(&status_str),
        payment_status: PaymentStatus::parse(&payment_status_str),
        payment_reference: row.get("payment_reference"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
