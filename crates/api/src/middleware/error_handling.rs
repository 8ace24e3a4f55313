//! # Error Handling Middleware
//!
//! Maps the domain error taxonomy to HTTP responses with a machine-readable
//! `kind` field, so clients can distinguish a booking conflict (re-list and
//! pick again) from caller errors and store outages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use turnos_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain `BookingError` values and implements
/// `IntoResponse` to turn them into HTTP responses with the right status
/// code and a structured JSON payload.
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses.
///
/// A `Conflict` maps to 409: the chosen slot was taken between listing and
/// committing, which is expected and recoverable. An `Upstream` failure maps
/// to 503 and is never silently replaced with an empty result.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Format the error message and kind as JSON
        let body = Json(json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
        }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, BookingError>`
/// inside handlers that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Infrastructure failures reaching a handler are store failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Upstream(err))
    }
}
