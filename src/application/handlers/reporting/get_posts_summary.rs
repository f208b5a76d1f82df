//! GetPostsSummaryHandler - time-bucketed post counts for the owner.

use std::sync::Arc;

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, OwnedByUser, Principal, Timestamp};
use crate::domain::reporting::{summarize_posts, PostsSummary};
use crate::ports::{CenterRepository, PostReader};

/// Query for a center's posts summary.
#[derive(Debug, Clone)]
pub struct GetPostsSummaryQuery {
    pub principal: Principal,
    pub center_id: CenterId,
}

/// Handler computing the posts summary relative to the current moment.
pub struct GetPostsSummaryHandler {
    centers: Arc<dyn CenterRepository>,
    posts: Arc<dyn PostReader>,
}

impl GetPostsSummaryHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, posts: Arc<dyn PostReader>) -> Self {
        Self { centers, posts }
    }

    pub async fn handle(&self, query: GetPostsSummaryQuery) -> Result<PostsSummary, DomainError> {
        let center = self
            .centers
            .find_by_id(&query.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&query.principal)?;

        let created = self
            .posts
            .created_timestamps_by_center(&query.center_id)
            .await?;

        Ok(summarize_posts(Timestamp::now(), &created))
    }
}
