use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::BookingError;
use crate::models::slot::Slot;

use super::clock::ShopClock;
use super::hours::OpeningHours;

/// Step between successive candidate starts, in minutes.
pub const DEFAULT_GRANULARITY_MINUTES: u16 = 30;

/// Enumerates candidate slots for a calendar day. Built once from
/// configuration and shared across requests; generation is a pure function
/// of its inputs.
#[derive(Debug, Clone)]
pub struct SlotGenerator {
    hours: OpeningHours,
    clock: ShopClock,
    granularity_minutes: u16,
}

impl SlotGenerator {
    pub fn new(
        hours: OpeningHours,
        clock: ShopClock,
        granularity_minutes: u16,
    ) -> Result<Self, BookingError> {
        if granularity_minutes == 0 {
            return Err(BookingError::InvalidInput(
                "slot granularity must be positive".to_string(),
            ));
        }
        hours.validate()?;
        Ok(Self {
            hours,
            clock,
            granularity_minutes,
        })
    }

    pub fn clock(&self) -> &ShopClock {
        &self.clock
    }

    pub fn hours(&self) -> &OpeningHours {
        &self.hours
    }

    /// All slots of `duration_minutes` that fit inside the day's open
    /// intervals, in ascending start order. Walks each interval from its
    /// start, stepping by the configured granularity; stops as soon as the
    /// duration no longer fits, so no truncated slot is ever produced.
    /// A closed day yields an empty list.
    pub fn candidates(
        &self,
        date: NaiveDate,
        duration_minutes: i32,
    ) -> Result<Vec<Slot>, BookingError> {
        if duration_minutes <= 0 {
            return Err(BookingError::InvalidInput(format!(
                "service duration must be positive, got {duration_minutes}"
            )));
        }
        let duration = i64::from(duration_minutes);

        let mut slots = Vec::new();
        for interval in self.hours.intervals_for(date.weekday()) {
            let mut cursor = i64::from(interval.start);
            while cursor + duration <= i64::from(interval.end) {
                let start = self.clock.to_instant(date, cursor);
                slots.push(Slot {
                    start,
                    end: start + Duration::minutes(duration),
                });
                cursor += i64::from(self.granularity_minutes);
            }
        }
        Ok(slots)
    }
}
