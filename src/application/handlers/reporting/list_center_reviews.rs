//! ListCenterReviewsHandler - paginated review listing for the owner.

use std::sync::Arc;

use crate::domain::foundation::{
    paginate, CenterId, DomainError, ErrorCode, OwnedByUser, Paginated, Principal,
};
use crate::ports::{CenterRepository, ReviewReader, ReviewView};

/// Query for one page of a center's reviews.
#[derive(Debug, Clone)]
pub struct ListCenterReviewsQuery {
    pub principal: Principal,
    pub center_id: CenterId,
    /// Zero-based page number.
    pub page: u32,
    pub per_page: u32,
}

/// Handler for the paginated review listing.
pub struct ListCenterReviewsHandler {
    centers: Arc<dyn CenterRepository>,
    reviews: Arc<dyn ReviewReader>,
}

impl ListCenterReviewsHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, reviews: Arc<dyn ReviewReader>) -> Self {
        Self { centers, reviews }
    }

    pub async fn handle(
        &self,
        query: ListCenterReviewsQuery,
    ) -> Result<Paginated<ReviewView>, DomainError> {
        let center = self
            .centers
            .find_by_id(&query.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&query.principal)?;

        let page = self
            .reviews
            .list_by_center(&query.center_id, query.page, query.per_page)
            .await?;

        Ok(paginate(page, |review| review))
    }
}
