use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;

use turnos_api::middleware::error_handling::AppError;
use turnos_core::errors::BookingError;

async fn response_parts(err: BookingError) -> (StatusCode, Value) {
    let response = AppError(err).into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, body)
}

#[tokio::test]
async fn conflict_maps_to_409_with_machine_readable_kind() {
    let (status, body) =
        response_parts(BookingError::Conflict("slot already taken".to_string())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "CONFLICT");
    assert!(body["error"].as_str().unwrap().contains("slot already taken"));
}

#[tokio::test]
async fn validation_error_maps_to_400() {
    let (status, body) =
        response_parts(BookingError::InvalidInput("bad date".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION");
}

#[tokio::test]
async fn missing_resource_maps_to_404() {
    let (status, body) = response_parts(BookingError::NotFound("no such service".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NOT_FOUND");
}

#[tokio::test]
async fn store_outage_maps_to_503_not_an_empty_listing() {
    let (status, body) = response_parts(BookingError::Upstream(eyre::eyre!("pool timed out"))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "UPSTREAM_UNAVAILABLE");
}

#[test]
fn slot_listing_serializes_as_instant_strings() {
    let slots: Vec<DateTime<Utc>> = vec![
        "2025-03-17T11:30:00Z".parse().unwrap(),
        "2025-03-17T12:00:00Z".parse().unwrap(),
    ];

    let json = serde_json::to_value(&slots).unwrap();

    assert_eq!(
        json,
        serde_json::json!(["2025-03-17T11:30:00Z", "2025-03-17T12:00:00Z"])
    );
}
