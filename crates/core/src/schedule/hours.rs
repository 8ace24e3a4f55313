use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A half-open wall-clock window `[start, end)` in minutes since local
/// midnight, e.g. `{510, 780}` for 08:30–13:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenInterval {
    pub start: u16,
    pub end: u16,
}

impl OpenInterval {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }
}

/// Static table of bookable windows per weekday, supplied as configuration
/// at startup and injected into the slot generator. Indexed by days from
/// Sunday; a day with no entries is closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    days: [Vec<OpenInterval>; 7],
}

impl OpeningHours {
    /// A table with every day closed, to be filled in with [`with_day`].
    ///
    /// [`with_day`]: OpeningHours::with_day
    pub fn closed() -> Self {
        Self {
            days: std::array::from_fn(|_| Vec::new()),
        }
    }

    pub fn with_day(mut self, weekday: Weekday, intervals: Vec<OpenInterval>) -> Self {
        self.days[weekday.num_days_from_sunday() as usize] = intervals;
        self
    }

    /// The workshop's schedule: split shift on weekdays, mornings on
    /// Saturday, closed on Sunday.
    pub fn workshop_default() -> Self {
        let split_shift = vec![OpenInterval::new(510, 780), OpenInterval::new(990, 1230)];
        let morning_only = vec![OpenInterval::new(510, 780)];

        Self::closed()
            .with_day(Weekday::Mon, split_shift.clone())
            .with_day(Weekday::Tue, split_shift.clone())
            .with_day(Weekday::Wed, split_shift.clone())
            .with_day(Weekday::Thu, split_shift.clone())
            .with_day(Weekday::Fri, split_shift)
            .with_day(Weekday::Sat, morning_only)
    }

    /// Open windows for a weekday, in ascending order. Empty means closed.
    pub fn intervals_for(&self, weekday: Weekday) -> &[OpenInterval] {
        &self.days[weekday.num_days_from_sunday() as usize]
    }

    /// Checks the table invariants: every interval is non-empty, ends within
    /// the day, and intervals on the same day are sorted and disjoint.
    pub fn validate(&self) -> Result<(), BookingError> {
        for (day_index, intervals) in self.days.iter().enumerate() {
            for interval in intervals {
                if interval.start >= interval.end {
                    return Err(BookingError::InvalidInput(format!(
                        "opening hours for day {day_index}: interval start {} is not before end {}",
                        interval.start, interval.end
                    )));
                }
                if interval.end > MINUTES_PER_DAY {
                    return Err(BookingError::InvalidInput(format!(
                        "opening hours for day {day_index}: interval end {} exceeds {}",
                        interval.end, MINUTES_PER_DAY
                    )));
                }
            }
            for pair in intervals.windows(2) {
                if pair[0].end > pair[1].start {
                    return Err(BookingError::InvalidInput(format!(
                        "opening hours for day {day_index}: intervals overlap or are out of order"
                    )));
                }
            }
        }
        Ok(())
    }
}
