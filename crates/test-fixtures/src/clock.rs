use chrono::{NaiveDate, NaiveDateTime};

use carbonsense_core::traits::IClock;

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Frozen at `hour:00` on the given date.
    ///
    /// # Panics
    /// Panics on an invalid date or hour.
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        let dt = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap_or_else(|| panic!("invalid fixture time {year}-{month}-{day} {hour}:00"));
        Self(dt)
    }

    /// Tuesday 2024-03-12 at `hour:00`.
    pub fn weekday(hour: u32) -> Self {
        Self::at(2024, 3, 12, hour)
    }

    /// Saturday 2024-03-16 at `hour:00`.
    pub fn saturday(hour: u32) -> Self {
        Self::at(2024, 3, 16, hour)
    }
}

impl IClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
