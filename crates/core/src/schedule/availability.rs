use chrono::NaiveDate;

use crate::errors::BookingError;
use crate::models::reservation::Reservation;
use crate::models::slot::Slot;

use super::overlap::conflicts_with;
use super::slots::SlotGenerator;

/// Free slots for a day: every candidate the generator proposes that does
/// not collide with a live reservation. Order follows the generator
/// (ascending, morning before afternoon). Callers fetch `reservations` from
/// the store for the local day window; this function stays pure so the same
/// inputs always produce the same listing.
pub fn available_slots(
    generator: &SlotGenerator,
    date: NaiveDate,
    duration_minutes: i32,
    reservations: &[Reservation],
) -> Result<Vec<Slot>, BookingError> {
    let candidates = generator.candidates(date, duration_minutes)?;
    Ok(candidates
        .into_iter()
        .filter(|slot| !conflicts_with(slot.start, slot.end, reservations))
        .collect())
}
