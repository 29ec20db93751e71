// ABOUTME: Integration tests for the booking route handlers
// ABOUTME: Tests server-side pricing, validation failures, and booking listing

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_cleaner, create_test_server_resources};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use shinehub::routes::bookings::{BookingReceipt, BookingRoutes};
use uuid::Uuid;

fn booking_payload(cleaner_id: &str, service_name: &str) -> Value {
    json!({
        "cleaner_id": cleaner_id,
        "service_name": service_name,
        "scheduled_time": "2025-06-01T10:00:00Z",
        "customer_name": "Ada Lovelace",
        "customer_phone": "+1-555-0199",
        "customer_email": "ada@example.com",
        "address": "123 Main St",
        "lat": 37.77,
        "lng": -122.43,
        "car_make": "Toyota",
        "car_model": "Corolla",
        "notes": "Gate code 4242"
    })
}

#[tokio::test]
async fn test_create_booking_exterior_wash_pricing() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::post("/book")
        .json(&booking_payload(&cleaner.id.to_string(), "Exterior Wash"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let receipt: BookingReceipt = response.json();

    // service 25 + callout 5
    assert_eq!(receipt.total_price, 30.0);
    assert_eq!(receipt.commission_amount, 3.00);
    assert_eq!(receipt.net_amount, 27.00);
    assert!(!receipt.booking_id.is_empty());
    assert!(receipt.message.contains("payment"));
}

#[tokio::test]
async fn test_create_booking_full_detail_pricing() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::post("/book")
        .json(&booking_payload(&cleaner.id.to_string(), "Full Detail"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let receipt: BookingReceipt = response.json();

    // service 99 + callout 5
    assert_eq!(receipt.total_price, 104.0);
    assert_eq!(receipt.commission_amount, 10.40);
    assert_eq!(receipt.net_amount, 93.60);
}

#[tokio::test]
async fn test_booking_unknown_cleaner_is_not_found() {
    let resources = create_test_server_resources().await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::post("/book")
        .json(&booking_payload(&Uuid::new_v4().to_string(), "Exterior Wash"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_booking_malformed_cleaner_id_is_not_found() {
    let resources = create_test_server_resources().await;
    create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    // Malformed identifiers are treated like unknown cleaners, not as a
    // separate validation error
    let response = AxumTestRequest::post("/book")
        .json(&booking_payload("not-a-uuid", "Exterior Wash"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_unknown_service_is_invalid_request() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::post("/book")
        .json(&booking_payload(&cleaner.id.to_string(), "Engine Steam"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("not offered"));
}

#[tokio::test]
async fn test_booking_service_lookup_is_case_sensitive() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::post("/book")
        .json(&booking_payload(&cleaner.id.to_string(), "exterior wash"))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_new_booking_starts_pending_and_unpaid() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources.clone());

    AxumTestRequest::post("/book")
        .json(&booking_payload(&cleaner.id.to_string(), "Exterior Wash"))
        .send(router.clone())
        .await;

    let response = AxumTestRequest::get("/bookings").send(router).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let bookings: Vec<Value> = response.json();
    assert_eq!(bookings.len(), 1);
    let booking = &bookings[0];
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["payment_status"], "unpaid");
    assert_eq!(booking["payment_reference"], Value::Null);
    assert!(booking["id"].is_string());
    assert_eq!(booking["service_name"], "Exterior Wash");
    assert_eq!(booking["cleaner_id"], cleaner.id.to_string());
}

#[tokio::test]
async fn test_client_supplied_price_is_ignored() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let mut payload = booking_payload(&cleaner.id.to_string(), "Exterior Wash");
    // Not part of the contract; must not influence server-side pricing
    payload["total_price"] = json!(0.01);
    payload["service_price"] = json!(0.01);

    let response = AxumTestRequest::post("/book").json(&payload).send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let receipt: BookingReceipt = response.json();
    assert_eq!(receipt.total_price, 30.0);
}

#[tokio::test]
async fn test_list_bookings_empty_store() {
    let resources = create_test_server_resources().await;
    let router = BookingRoutes::routes(resources);

    let response = AxumTestRequest::get("/bookings").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let bookings: Vec<Value> = response.json();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_booking_without_car_details_serializes_null_car() {
    let resources = create_test_server_resources().await;
    let cleaner = create_test_cleaner(&resources.database).await;
    let router = BookingRoutes::routes(resources);

    let payload = json!({
        "cleaner_id": cleaner.id.to_string(),
        "service_name": "Exterior Wash",
        "scheduled_time": "2025-06-01T10:00:00Z",
        "customer_name": "Ada Lovelace",
        "customer_phone": "+1-555-0199"
    });

    let created = AxumTestRequest::post("/book")
        .json(&payload)
        .send(router.clone())
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);

    let bookings: Vec<Value> = AxumTestRequest::get("/bookings").send(router).await.json();
    assert_eq!(bookings[0]["car"], Value::Null);
    assert_eq!(bookings[0]["customer"]["email"], Value::Null);
}
