//! Review reader port (read side / CQRS queries).

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{CenterId, DomainError, Page, ReviewId, Timestamp, UserId};
use crate::domain::reporting::ReviewRecord;

/// Reader port for center reviews.
#[async_trait]
pub trait ReviewReader: Send + Sync {
    /// Tag and answered facts for every review of a center.
    ///
    /// Raw input to the reviews summary; insertion order, since tag
    /// frequency ties keep first-seen order.
    async fn records_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<ReviewRecord>, DomainError>;

    /// Existence and parent lookup for a single review.
    async fn find_head(&self, review_id: &ReviewId) -> Result<Option<ReviewHead>, DomainError>;

    /// One page of reviews for a center, newest first.
    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<ReviewView>, DomainError>;
}

/// Just enough of a review to check existence and ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewHead {
    pub id: ReviewId,
    pub center_id: CenterId,
}

/// Read-optimized view of one review with its answer, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub id: ReviewId,
    pub author_user_id: UserId,
    pub content: String,
    pub tags: Vec<String>,
    pub answer: Option<String>,
    pub created_at: Timestamp,
}
