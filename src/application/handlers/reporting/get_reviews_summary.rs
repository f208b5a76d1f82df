//! GetReviewsSummaryHandler - review counts and tag frequency for the owner.

use std::sync::Arc;

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, OwnedByUser, Principal};
use crate::domain::reporting::{summarize_reviews, ReviewsSummary};
use crate::ports::{CenterRepository, ReviewReader};

/// Query for a center's reviews summary.
#[derive(Debug, Clone)]
pub struct GetReviewsSummaryQuery {
    pub principal: Principal,
    pub center_id: CenterId,
}

/// Handler computing the reviews summary.
pub struct GetReviewsSummaryHandler {
    centers: Arc<dyn CenterRepository>,
    reviews: Arc<dyn ReviewReader>,
}

impl GetReviewsSummaryHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, reviews: Arc<dyn ReviewReader>) -> Self {
        Self { centers, reviews }
    }

    pub async fn handle(&self, query: GetReviewsSummaryQuery) -> Result<ReviewsSummary, DomainError> {
        let center = self
            .centers
            .find_by_id(&query.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&query.principal)?;

        let records = self.reviews.records_by_center(&query.center_id).await?;
        Ok(summarize_reviews(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::approval::mocks::MockCenterRepository;
    use crate::application::handlers::reporting::mocks::MockReviewReader;
    use crate::domain::center::Center;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::reporting::ReviewRecord;

    fn owner_principal(owner: UserId) -> Principal {
        Principal::new(owner, Role::CenterAdmin, "owner@example.com")
    }

    fn record(tags: &[&str], answered: bool) -> ReviewRecord {
        ReviewRecord {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            answered,
        }
    }

    #[tokio::test]
    async fn summarizes_reviews_for_owner() {
        let owner = UserId::new();
        let center = Center::register(CenterId::new(), owner, "Boulder House");
        let center_id = center.id;

        let centers = Arc::new(MockCenterRepository::with_center(center));
        let reviews = Arc::new(MockReviewReader::with_records(
            center_id,
            vec![
                record(&["clean", "friendly"], true),
                record(&["clean"], false),
            ],
        ));

        let summary = GetReviewsSummaryHandler::new(centers, reviews)
            .handle(GetReviewsSummaryQuery {
                principal: owner_principal(owner),
                center_id,
            })
            .await
            .unwrap();

        assert_eq!(summary.count_total, 2);
        assert_eq!(summary.count_answered, 1);
        assert_eq!(summary.count_not_answered, 1);
        assert_eq!(summary.tag_frequency[0].tag, "clean");
        assert_eq!(summary.tag_frequency[0].count, 2);
    }

    #[tokio::test]
    async fn non_owner_fails() {
        let center = Center::register(CenterId::new(), UserId::new(), "Boulder House");
        let center_id = center.id;

        let centers = Arc::new(MockCenterRepository::with_center(center));
        let reviews = Arc::new(MockReviewReader::new());

        let err = GetReviewsSummaryHandler::new(centers, reviews)
            .handle(GetReviewsSummaryQuery {
                principal: owner_principal(UserId::new()),
                center_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn fails_when_center_missing() {
        let centers = Arc::new(MockCenterRepository::new());
        let reviews = Arc::new(MockReviewReader::new());

        let err = GetReviewsSummaryHandler::new(centers, reviews)
            .handle(GetReviewsSummaryQuery {
                principal: owner_principal(UserId::new()),
                center_id: CenterId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CenterNotFound);
    }
}
