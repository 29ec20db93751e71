// ABOUTME: Route handlers for booking creation and listing
// ABOUTME: Re-validates the service against the stored cleaner and fixes pricing server-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Booking routes
//!
//! `POST /book` never trusts a client-supplied price: the cleaner record is
//! re-read and the quote is computed from stored values only. Creation is a
//! single insert; payment is explicitly deferred to a later step the caller
//! must trigger.

use crate::database::bookings::NewBooking;
use crate::errors::AppError;
use crate::models::{Booking, BookingCustomer, BookingLocation, CarDetails};
use crate::pricing::quote_booking;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for creating a booking
#[derive(Debug, Deserialize)]
pub struct CreateBookingBody {
    /// Cleaner to book against
    pub cleaner_id: String,
    /// Exact service name from the cleaner's list
    pub service_name: String,
    /// Scheduled start time (ISO string)
    pub scheduled_time: String,
    /// Customer name
    pub customer_name: String,
    /// Customer phone
    pub customer_phone: String,
    /// Customer email
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Service address
    #[serde(default)]
    pub address: Option<String>,
    /// Service latitude
    #[serde(default)]
    pub lat: Option<f64>,
    /// Service longitude
    #[serde(default)]
    pub lng: Option<f64>,
    /// Car make
    #[serde(default)]
    pub car_make: Option<String>,
    /// Car model
    #[serde(default)]
    pub car_model: Option<String>,
    /// Car color
    #[serde(default)]
    pub car_color: Option<String>,
    /// License plate
    #[serde(default)]
    pub car_plate: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response for a successful booking creation
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Generated booking identifier
    pub booking_id: String,
    /// Total price including callout fee
    pub total_price: f64,
    /// Platform commission amount
    pub commission_amount: f64,
    /// Net amount to the cleaner
    pub net_amount: f64,
    /// Human-readable confirmation message
    pub message: String,
}

/// Booking view with the identifier rendered as an opaque string
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Unique identifier
    pub id: String,
    /// Flattened booking record
    #[serde(flatten)]
    pub booking: BookingBody,
}

/// The booking fields shared between storage and responses
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingBody {
    /// Cleaner reference
    pub cleaner_id: String,
    /// Chosen service name
    pub service_name: String,
    /// Service price at booking time
    pub service_price: f64,
    /// Scheduled start time
    pub scheduled_time: String,
    /// Service location
    pub location: BookingLocation,
    /// Customer contact
    pub customer: BookingCustomer,
    /// Car details
    pub car: Option<CarDetails>,
    /// Notes
    pub notes: Option<String>,
    /// Total price
    pub total_price: f64,
    /// Commission rate applied
    pub commission_rate: f64,
    /// Commission amount
    pub commission_amount: f64,
    /// Net amount
    pub net_amount: f64,
    /// Lifecycle status
    pub status: String,
    /// Payment state
    pub payment_status: String,
    /// Payment reference, when paid
    pub payment_reference: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            booking: BookingBody {
                cleaner_id: booking.cleaner_id,
                service_name: booking.service_name,
                service_price: booking.service_price,
                scheduled_time: booking.scheduled_time,
                location: booking.location,
                customer: booking.customer,
                car: booking.car,
                notes: booking.notes,
                total_price: booking.total_price,
                commission_rate: booking.commission_rate,
                commission_amount: booking.commission_amount,
                net_amount: booking.net_amount,
                status: booking.status.as_str().to_owned(),
                payment_status: booking.payment_status.as_str().to_owned(),
                payment_reference: booking.payment_reference,
                created_at: booking.created_at.to_rfc3339(),
            },
        }
    }
}

/// Booking routes handler
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/book", post(Self::handle_create))
            .route("/bookings", get(Self::handle_list))
            .with_state(resources)
    }

    /// Handle POST /book - create a booking with server-side pricing
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateBookingBody>,
    ) -> Result<Response, AppError> {
        resources.database.check_available().await?;

        // Malformed identifiers are indistinguishable from unknown cleaners
        let cleaner_id = Uuid::parse_str(&body.cleaner_id)
            .map_err(|_| AppError::not_found("Cleaner"))?;

        let cleaner = resources
            .database
            .cleaners()
            .get(cleaner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Cleaner"))?;

        let quote = quote_booking(&cleaner, &body.service_name)?;

        let car = CarDetails {
            make: body.car_make,
            model: body.car_model,
            color: body.car_color,
            plate: body.car_plate,
        };

        let new_booking = NewBooking {
            cleaner_id: body.cleaner_id,
            service_name: body.service_name,
            scheduled_time: body.scheduled_time,
            location: BookingLocation {
                lat: body.lat,
                lng: body.lng,
                address: body.address,
            },
            customer: BookingCustomer {
                name: body.customer_name,
                phone: body.customer_phone,
                email: body.customer_email,
            },
            car: if car.is_empty() { None } else { Some(car) },
            notes: body.notes,
            quote,
        };

        let booking = resources.database.bookings().create(&new_booking).await?;
        info!(
            booking_id = %booking.id,
            cleaner_id = %booking.cleaner_id,
            service = %booking.service_name,
            total = booking.total_price,
            "Booking created"
        );

        let receipt = BookingReceipt {
            booking_id: booking.id.to_string(),
            total_price: booking.total_price,
            commission_amount: booking.commission_amount,
            net_amount: booking.net_amount,
            message: "Booking created. Proceed to payment to confirm.".to_owned(),
        };

        Ok((StatusCode::OK, Json(receipt)).into_response())
    }

    /// Handle GET /bookings - list every stored booking
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        resources.database.check_available().await?;

        let bookings = resources.database.bookings().list().await?;
        let response: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
