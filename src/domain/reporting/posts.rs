//! Time-bucketed post counts for a center.
//!
//! All boundaries are computed on the UTC calendar. The bucket skeleton is
//! built first (7 days, 52 ISO weeks, all zero) and raw events are folded
//! into it by derived key, so every bucket is present even when empty and
//! weeks near a year boundary bucket by `(ISO year, ISO week)` instead of
//! week-of-year alone.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Number of daily buckets in a posts summary.
pub const DAILY_BUCKETS: usize = 7;

/// Number of weekly buckets in a posts summary.
pub const WEEKLY_BUCKETS: usize = 52;

/// Post count for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Post count for one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyCount {
    pub iso_year: i32,
    pub iso_week: u32,
    pub count: u64,
}

/// Derived post metrics for a center, relative to a fixed `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostsSummary {
    /// Posts created since the start of the current UTC day.
    pub count_today: u64,
    /// Posts created within the trailing 7 days.
    pub count_week: u64,
    /// Posts created within the trailing 30 days.
    pub count_month: u64,
    /// All posts for the center.
    pub count_total: u64,
    /// Exactly 7 buckets, oldest day first, today last.
    pub count_per_day: Vec<DailyCount>,
    /// Exactly 52 buckets, oldest week first, the current ISO week last.
    pub count_per_week: Vec<WeeklyCount>,
}

/// Computes the posts summary from raw creation timestamps.
///
/// `now` is passed explicitly so the arithmetic is deterministic under test;
/// callers use `Timestamp::now()`.
pub fn summarize_posts(now: Timestamp, created: &[Timestamp]) -> PostsSummary {
    let start_of_today = now.start_of_day();
    let week_ago = now.minus_days(7);
    let month_ago = now.minus_days(30);

    let count_today = created.iter().filter(|t| **t >= start_of_today).count() as u64;
    let count_week = created
        .iter()
        .filter(|t| **t >= week_ago && **t <= now)
        .count() as u64;
    let count_month = created
        .iter()
        .filter(|t| **t >= month_ago && **t <= now)
        .count() as u64;
    let count_total = created.len() as u64;

    // Skeleton first, then fold by derived key.
    let mut count_per_day: Vec<DailyCount> = (0..DAILY_BUCKETS)
        .rev()
        .map(|offset| DailyCount {
            date: now.minus_days(offset as i64).date(),
            count: 0,
        })
        .collect();
    for t in created {
        let key = t.date();
        if let Some(bucket) = count_per_day.iter_mut().find(|b| b.date == key) {
            bucket.count += 1;
        }
    }

    let mut count_per_week: Vec<WeeklyCount> = (0..WEEKLY_BUCKETS)
        .rev()
        .map(|offset| {
            let (iso_year, iso_week) = now.minus_weeks(offset as i64).iso_week();
            WeeklyCount {
                iso_year,
                iso_week,
                count: 0,
            }
        })
        .collect();
    for t in created {
        let (year, week) = t.iso_week();
        if let Some(bucket) = count_per_week
            .iter_mut()
            .find(|b| b.iso_year == year && b.iso_week == week)
        {
            bucket.count += 1;
        }
    }

    PostsSummary {
        count_today,
        count_week,
        count_month,
        count_total,
        count_per_day,
        count_per_week,
    }
}
