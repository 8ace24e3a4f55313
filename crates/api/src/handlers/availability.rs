//! # Availability Handler
//!
//! Computes the bookable slots for a calendar day and a service. This is the
//! read side of the booking flow: the client lists free slots here, picks
//! one, and commits it through the appointment handler.
//!
//! ## Listing Algorithm
//!
//! 1. Parse and validate the requested date and service
//! 2. Resolve the local-day window to a UTC range via the shop clock
//! 3. Fetch every non-cancelled appointment starting in that window
//! 4. Generate candidate slots from the opening hours at the configured
//!    granularity
//! 5. Drop each candidate that overlaps a live appointment (half-open
//!    intervals, so a slot may start exactly when another ends)
//!
//! The result is an ordered array of absolute start instants. Listing is
//! read-only and idempotent; the authoritative conflict check happens again
//! at commit time, because another booking can land between the two calls.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use turnos_core::{errors::BookingError, schedule::available_slots};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability listing endpoint
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?date=2025-03-17&service_id=<uuid>
/// ```
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,

    /// Service whose duration the slots must accommodate
    pub service_id: Uuid,
}

/// Lists the free slots for a day and service as ordered start instants.
///
/// # Errors
///
/// * `VALIDATION` - unparseable date or non-positive service duration
/// * `NOT_FOUND` - unknown service
/// * `UPSTREAM_UNAVAILABLE` - the reservation read failed; propagated rather
///   than answered with an empty list, which would read as "fully booked"
#[axum::debug_handler]
pub async fn list_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<DateTime<Utc>>>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        BookingError::InvalidInput(format!("invalid date: {} (expected YYYY-MM-DD)", query.date))
    })?;

    let service = turnos_db::repositories::catalog::get_service_by_id(&state.db_pool, query.service_id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", query.service_id)))?;

    // One read of upstream state: every appointment that starts inside the
    // local calendar day.
    let (day_start, day_end) = state.scheduler.clock().day_bounds(date);
    let rows = turnos_db::repositories::appointment::list_in_range(&state.db_pool, day_start, day_end)
        .await
        .map_err(BookingError::Upstream)?;

    let reservations = rows
        .into_iter()
        .map(|row| row.into_reservation())
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(BookingError::Upstream)?;

    let slots = available_slots(&state.scheduler, date, service.duration_minutes, &reservations)?;

    Ok(Json(slots.into_iter().map(|slot| slot.start).collect()))
}
