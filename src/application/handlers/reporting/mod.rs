//! Reporting and listing handlers, all owner-scoped reads.

mod get_posts_summary;
mod get_reviews_summary;
mod list_center_posts;
mod list_center_reviews;

#[cfg(test)]
pub(crate) mod mocks;

pub use get_posts_summary::{GetPostsSummaryHandler, GetPostsSummaryQuery};
pub use get_reviews_summary::{GetReviewsSummaryHandler, GetReviewsSummaryQuery};
pub use list_center_posts::{ListCenterPostsHandler, ListCenterPostsQuery};
pub use list_center_reviews::{ListCenterReviewsHandler, ListCenterReviewsQuery};
