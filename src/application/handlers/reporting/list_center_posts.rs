//! ListCenterPostsHandler - paginated post listing for the owner.

use std::sync::Arc;

use crate::domain::foundation::{
    paginate, CenterId, DomainError, ErrorCode, OwnedByUser, Paginated, Principal,
};
use crate::ports::{CenterRepository, PostReader, PostView};

/// Query for one page of a center's posts.
#[derive(Debug, Clone)]
pub struct ListCenterPostsQuery {
    pub principal: Principal,
    pub center_id: CenterId,
    /// Zero-based page number.
    pub page: u32,
    pub per_page: u32,
}

/// Handler for the paginated post listing.
pub struct ListCenterPostsHandler {
    centers: Arc<dyn CenterRepository>,
    posts: Arc<dyn PostReader>,
}

impl ListCenterPostsHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, posts: Arc<dyn PostReader>) -> Self {
        Self { centers, posts }
    }

    pub async fn handle(
        &self,
        query: ListCenterPostsQuery,
    ) -> Result<Paginated<PostView>, DomainError> {
        let center = self
            .centers
            .find_by_id(&query.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&query.principal)?;

        let page = self
            .posts
            .list_by_center(&query.center_id, query.page, query.per_page)
            .await?;

        Ok(paginate(page, |post| post))
    }
}
