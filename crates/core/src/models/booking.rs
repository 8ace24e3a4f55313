use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reservation::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for AppointmentResponse {
    fn from(reservation: Reservation) -> Self {
        let end_time = reservation.end_time();
        Self {
            id: reservation.id,
            client_id: reservation.client_id,
            vehicle_id: reservation.vehicle_id,
            service_id: reservation.service_id,
            start_time: reservation.start_time,
            end_time,
            duration_minutes: reservation.duration_minutes,
            status: reservation.status,
            created_at: reservation.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReservationStatus,
}
