use std::error::Error;
use turnos_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Service not found".to_string());
    let invalid = BookingError::InvalidInput("duration must be positive".to_string());
    let conflict = BookingError::Conflict("slot already taken".to_string());
    let upstream = BookingError::Upstream(eyre::eyre!("connection refused"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Service not found");
    assert_eq!(
        invalid.to_string(),
        "Invalid input: duration must be positive"
    );
    assert_eq!(conflict.to_string(), "Booking conflict: slot already taken");
    assert!(upstream.to_string().contains("Upstream store unavailable"));
    assert!(internal.to_string().contains("Internal error"));
}

#[test]
fn test_error_kinds() {
    assert_eq!(BookingError::NotFound(String::new()).kind(), "NOT_FOUND");
    assert_eq!(BookingError::InvalidInput(String::new()).kind(), "VALIDATION");
    assert_eq!(BookingError::Conflict(String::new()).kind(), "CONFLICT");
    assert_eq!(
        BookingError::Upstream(eyre::eyre!("down")).kind(),
        "UPSTREAM_UNAVAILABLE"
    );
    assert_eq!(
        BookingError::Internal(Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom"
        )))
        .kind(),
        "INTERNAL"
    );
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("pool exhausted");
    let booking_error = BookingError::from(report);

    assert!(matches!(booking_error, BookingError::Upstream(_)));
}
