//! Timestamp value object for immutable points in time.
//!
//! All timestamps are UTC; day and week bucket boundaries in the reporting
//! module are derived from the UTC calendar.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a new timestamp offset by the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of weeks.
    pub fn minus_weeks(&self, weeks: i64) -> Self {
        Self(self.0 - Duration::weeks(weeks))
    }

    /// Returns the timestamp truncated to the start of its UTC day.
    pub fn start_of_day(&self) -> Self {
        // midnight always exists on a UTC calendar day
        Self(
            self.0
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .expect("midnight is a valid time")
                .and_utc(),
        )
    }

    /// Returns the UTC calendar date, used as a daily bucket key.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns the ISO-8601 `(year, week)` pair, used as a weekly bucket key.
    ///
    /// The ISO year can differ from the calendar year near year boundaries,
    /// which keeps week 1 of different years from colliding.
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.0.iso_week();
        (week.year(), week.week())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
