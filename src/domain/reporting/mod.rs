//! Read-only derived metrics over persisted event rows.

mod posts;
mod reviews;

pub use posts::{
    summarize_posts, DailyCount, PostsSummary, WeeklyCount, DAILY_BUCKETS, WEEKLY_BUCKETS,
};
pub use reviews::{summarize_reviews, ReviewRecord, ReviewsSummary, TagCount};
