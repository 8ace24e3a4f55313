use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use turnos_core::{
    errors::BookingError,
    models::booking::{AppointmentResponse, BookAppointmentRequest, UpdateStatusRequest},
};
use turnos_db::repositories::appointment::InsertOutcome;

use crate::{middleware::error_handling::AppError, ApiState};

/// Books a slot: validates the referenced records, then re-checks the chosen
/// interval against current appointments and inserts in a single atomic step
/// inside the store. Listing availability and committing are separate calls,
/// so the interval may have been taken in between; that case surfaces as a
/// 409 `CONFLICT` and the caller re-lists.
///
/// On success the confirmation notifier is invoked on a detached task; a
/// delivery failure is logged and never rolls back the booking.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    // Validate referenced records
    let client = turnos_db::repositories::catalog::get_client_by_id(&state.db_pool, payload.client_id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Client with ID {} not found", payload.client_id)))?;

    let vehicle = turnos_db::repositories::catalog::get_vehicle_by_id(&state.db_pool, payload.vehicle_id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Vehicle with ID {} not found", payload.vehicle_id)))?;

    if vehicle.client_id != client.id {
        return Err(AppError(BookingError::InvalidInput(format!(
            "vehicle {} does not belong to client {}",
            vehicle.id, client.id
        ))));
    }

    let service = turnos_db::repositories::catalog::get_service_by_id(&state.db_pool, payload.service_id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", payload.service_id)))?;

    // Atomic re-check-then-insert inside the store
    let outcome = turnos_db::repositories::appointment::insert_if_free(
        &state.db_pool,
        client.id,
        vehicle.id,
        service.id,
        payload.start_time,
        service.duration_minutes,
    )
    .await
    .map_err(BookingError::Upstream)?;

    let row = match outcome {
        InsertOutcome::Conflict => {
            return Err(AppError(BookingError::Conflict(format!(
                "slot starting at {} is no longer available",
                payload.start_time
            ))));
        }
        InsertOutcome::Created(row) => row,
    };

    let reservation = row.into_reservation().map_err(BookingError::Upstream)?;

    // Fire-and-forget confirmation
    let notifier = state.notifier.clone();
    let confirmed = reservation.clone();
    tokio::spawn(async move {
        if let Err(err) = notifier.on_booking_confirmed(&confirmed).await {
            tracing::warn!(appointment_id = %confirmed.id, "confirmation notification failed: {err}");
        }
    });

    Ok((StatusCode::CREATED, Json(AppointmentResponse::from(reservation))))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let row = turnos_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    let reservation = row.into_reservation().map_err(BookingError::Upstream)?;
    Ok(Json(AppointmentResponse::from(reservation)))
}

/// Moves an appointment through its lifecycle. The transition table is
/// closed; an illegal move (e.g. reviving a cancelled appointment) is
/// rejected with a 400 before anything is written. The write itself is
/// conditional on the status the transition was validated against, so two
/// requests racing from the same state cannot both win: the loser's update
/// matches no row and surfaces as a 409, and the caller re-reads.
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let row = turnos_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Upstream)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    let current = row.into_reservation().map_err(BookingError::Upstream)?;
    let next = current.status.transition_to(payload.status)?;

    let updated = turnos_db::repositories::appointment::update_status(
        &state.db_pool,
        id,
        next.as_str(),
        current.status.as_str(),
    )
    .await
    .map_err(BookingError::Upstream)?
    .ok_or_else(|| {
        BookingError::Conflict(format!(
            "appointment {} left status {} while the transition was validated",
            id, current.status
        ))
    })?;

    let reservation = updated.into_reservation().map_err(BookingError::Upstream)?;
    Ok(Json(AppointmentResponse::from(reservation)))
}
