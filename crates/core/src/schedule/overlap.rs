use chrono::{DateTime, Utc};

use crate::models::reservation::Reservation;

/// Half-open interval intersection: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && e1 > s2`. Touching endpoints do not overlap, so back-to-back
/// bookings are allowed.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whether `[start, end)` collides with any reservation that still occupies
/// its time. Cancelled reservations are skipped before the interval check.
pub fn conflicts_with(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reservations: &[Reservation],
) -> bool {
    reservations
        .iter()
        .filter(|reservation| reservation.status.occupies())
        .any(|reservation| {
            intervals_overlap(start, end, reservation.start_time, reservation.end_time())
        })
}
