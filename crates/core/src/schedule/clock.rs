use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::hours::MINUTES_PER_DAY;

/// Converts between local wall-clock minutes and absolute UTC instants
/// using a fixed offset (default −180 for Argentina, which does not observe
/// DST). The offset is configuration, not a constant, so a deployment in
/// another fixed-offset region can override it. Regions with DST are
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopClock {
    utc_offset_minutes: i32,
}

impl ShopClock {
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Absolute instant of `minute_of_day` on the local calendar `date`.
    /// Minutes outside `[0, 1440)` are allowed; the date arithmetic absorbs
    /// the rollover.
    pub fn to_instant(&self, date: NaiveDate, minute_of_day: i64) -> DateTime<Utc> {
        let midnight_utc = date.and_time(NaiveTime::MIN).and_utc();
        midnight_utc + Duration::minutes(minute_of_day - i64::from(self.utc_offset_minutes))
    }

    /// Wall-clock minute within the local day of `instant`.
    pub fn minute_of_day(&self, instant: DateTime<Utc>) -> u32 {
        let local = instant + Duration::minutes(i64::from(self.utc_offset_minutes));
        local.time().hour() * 60 + local.time().minute()
    }

    /// Local calendar date of `instant`.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        (instant + Duration::minutes(i64::from(self.utc_offset_minutes))).date_naive()
    }

    /// Half-open UTC window `[start, end)` covering the local calendar day.
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            self.to_instant(date, 0),
            self.to_instant(date, i64::from(MINUTES_PER_DAY)),
        )
    }
}

impl Default for ShopClock {
    fn default() -> Self {
        Self::new(-180)
    }
}
