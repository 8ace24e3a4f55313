use chrono::{DateTime, Utc};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use turnos_core::models::reservation::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClient {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVehicle {
    pub id: Uuid,
    pub client_id: Uuid,
    pub plate: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbAppointment {
    /// Maps the row into the engine's view. The status column is guarded by
    /// a CHECK constraint, so a parse failure means the schema and the code
    /// disagree.
    pub fn into_reservation(self) -> eyre::Result<Reservation> {
        let status: ReservationStatus = self
            .status
            .parse()
            .map_err(|err| eyre!("corrupt appointment row {}: {err}", self.id))?;
        Ok(Reservation {
            id: self.id,
            client_id: self.client_id,
            vehicle_id: self.vehicle_id,
            service_id: self.service_id,
            start_time: self.start_time,
            duration_minutes: self.duration_minutes,
            status,
            created_at: self.created_at,
        })
    }
}
