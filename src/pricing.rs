// ABOUTME: Booking price computation and service resolution
// ABOUTME: The one nontrivial routine: server-side totals, commission, and net amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Booking pricing
//!
//! Given a cleaner record and a requested service name, resolve the service
//! and fix all pricing server-side. Client-supplied prices are never part of
//! the contract.
//!
//! Rules:
//! - `total_price = service.price + cleaner.base_callout_fee`
//! - `commission_amount = round(total_price * COMMISSION_RATE, 2)`
//! - `net_amount = round(total_price - commission_amount, 2)`
//!
//! Net is derived by subtraction from the rounded commission rather than
//! rounded independently, so any rounding error is absorbed entirely into
//! the cleaner's net amount and `commission + net == total` always holds at
//! two decimal places.

use crate::errors::{AppError, AppResult};
use crate::models::Cleaner;
use serde::{Deserialize, Serialize};

/// Platform's cut of the total price
pub const COMMISSION_RATE: f64 = 0.10;

/// Server-side price breakdown for a booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// Price of the chosen service
    pub service_price: f64,
    /// Service price plus the cleaner's flat callout fee
    pub total_price: f64,
    /// Commission rate applied
    pub commission_rate: f64,
    /// Platform commission, rounded to cents
    pub commission_amount: f64,
    /// Amount owed to the cleaner after commission
    pub net_amount: f64,
}

/// Round a currency amount to two decimal places
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Resolve `service_name` against the cleaner's service list and compute the
/// fixed price breakdown.
///
/// The lookup is exact and case-sensitive; the first matching entry wins if
/// duplicates exist.
///
/// # Errors
///
/// Returns `InvalidInput` when the cleaner does not offer the named service.
pub fn quote_booking(cleaner: &Cleaner, service_name: &str) -> AppResult<BookingQuote> {
    let service = cleaner
        .find_service(service_name)
        .ok_or_else(|| AppError::invalid_input("Service not offered by cleaner"))?;

    let total_price = service.price + cleaner.base_callout_fee;
    let commission_amount = round_to_cents(total_price * COMMISSION_RATE);
    let net_amount = round_to_cents(total_price - commission_amount);

    Ok(BookingQuote {
        service_price: service.price,
        total_price,
        commission_rate: COMMISSION_RATE,
        commission_amount,
        net_amount,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Test assertions with exact literal float values

    use super::*;
    use crate::models::{GeoLocation, ProviderType, ServiceOption};
    use chrono::Utc;
    use uuid::Uuid;

    fn test_cleaner(services: Vec<(&str, f64)>, base_callout_fee: f64) -> Cleaner {
        let now = Utc::now();
        Cleaner {
            id: Uuid::new_v4(),
            name: "Sparkle Pro Detailing".into(),
            provider_type: ProviderType::Company,
            phone: Some("+1-555-0110".into()),
            bio: None,
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
            services: services
                .into_iter()
                .map(|(name, price)| ServiceOption {
                    name: name.into(),
                    description: None,
                    price,
                    duration_minutes: 30,
                })
                .collect(),
            base_callout_fee,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_exterior_wash_scenario() {
        let cleaner = test_cleaner(vec![("Exterior Wash", 25.0)], 5.0);
        let quote = quote_booking(&cleaner, "Exterior Wash").unwrap();

        assert_eq!(quote.total_price, 30.0);
        assert_eq!(quote.commission_amount, 3.00);
        assert_eq!(quote.net_amount, 27.00);
    }

    #[test]
    fn test_full_detail_scenario() {
        let cleaner = test_cleaner(vec![("Full Detail", 99.0)], 5.0);
        let quote = quote_booking(&cleaner, "Full Detail").unwrap();

        assert_eq!(quote.total_price, 104.0);
        assert_eq!(quote.commission_amount, 10.40);
        assert_eq!(quote.net_amount, 93.60);
    }

    #[test]
    fn test_total_is_service_plus_callout() {
        let cleaner = test_cleaner(vec![("Quick Wash", 15.0)], 3.0);
        let quote = quote_booking(&cleaner, "Quick Wash").unwrap();

        assert_eq!(quote.service_price, 15.0);
        assert_eq!(quote.total_price, 18.0);
    }

    #[test]
    fn test_commission_plus_net_equals_total() {
        // Totals chosen so that commission needs rounding
        for (price, callout) in [(33.33, 0.0), (19.99, 4.44), (0.01, 0.0), (7.77, 2.5)] {
            let cleaner = test_cleaner(vec![("Svc", price)], callout);
            let quote = quote_booking(&cleaner, "Svc").unwrap();

            let reassembled = round_to_cents(quote.commission_amount + quote.net_amount);
            assert_eq!(reassembled, round_to_cents(quote.total_price));
            assert_eq!(
                quote.commission_amount,
                round_to_cents(quote.total_price * COMMISSION_RATE)
            );
        }
    }

    #[test]
    fn test_rounding_error_absorbed_by_net() {
        // total 33.33 -> raw commission 3.333 -> rounds to 3.33, net takes 30.00
        let cleaner = test_cleaner(vec![("Svc", 33.33)], 0.0);
        let quote = quote_booking(&cleaner, "Svc").unwrap();

        assert_eq!(quote.commission_amount, 3.33);
        assert_eq!(quote.net_amount, 30.00);
    }

    #[test]
    fn test_zero_price_service() {
        let cleaner = test_cleaner(vec![("Free Inspection", 0.0)], 0.0);
        let quote = quote_booking(&cleaner, "Free Inspection").unwrap();

        assert_eq!(quote.total_price, 0.0);
        assert_eq!(quote.commission_amount, 0.0);
        assert_eq!(quote.net_amount, 0.0);
    }

    #[test]
    fn test_unknown_service_rejected() {
        let cleaner = test_cleaner(vec![("Exterior Wash", 25.0)], 5.0);
        let err = quote_booking(&cleaner, "Interior Clean").unwrap_err();

        assert_eq!(err.http_status(), 400);
        assert!(err.message.contains("not offered"));
    }

    #[test]
    fn test_service_lookup_is_case_sensitive() {
        let cleaner = test_cleaner(vec![("Exterior Wash", 25.0)], 5.0);
        assert!(quote_booking(&cleaner, "exterior wash").is_err());
    }
}
