use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BookingError;

/// Lifecycle of a persisted appointment.
///
/// Transitions are closed: `Requested → {Confirmed, Cancelled}`,
/// `Confirmed → {InProgress, Cancelled, NoShow}`, `InProgress → Done`.
/// `Done`, `Cancelled` and `NoShow` are terminal. Appointments are never
/// deleted, only moved to a terminal status, so history stays auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Requested,
    Confirmed,
    InProgress,
    Done,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Whether a reservation in this status blocks the time it covers.
    /// Only cancelled reservations free their interval.
    pub fn occupies(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReservationStatus::Done | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Requested, Confirmed)
                | (Requested, Cancelled)
                | (Confirmed, InProgress)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
                | (InProgress, Done)
        )
    }

    /// Validated transition; illegal moves are rejected rather than applied.
    pub fn transition_to(self, next: ReservationStatus) -> Result<ReservationStatus, BookingError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(BookingError::InvalidInput(format!(
                "illegal status transition: {} -> {}",
                self, next
            )))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Requested => "requested",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::InProgress => "in_progress",
            ReservationStatus::Done => "done",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(ReservationStatus::Requested),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "in_progress" => Ok(ReservationStatus::InProgress),
            "done" => Ok(ReservationStatus::Done),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "no_show" => Ok(ReservationStatus::NoShow),
            other => Err(BookingError::InvalidInput(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }
}

/// The engine's view of a persisted appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }
}
