//! DeleteReviewAnswerHandler - removes the answer from a review.

use std::sync::Arc;

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Principal, ReviewId};
use crate::ports::{CenterRepository, ReviewAnswerRepository, ReviewReader};

use super::resolve_owned_review;

/// Command to remove the answer from a review.
#[derive(Debug, Clone)]
pub struct DeleteReviewAnswerCommand {
    pub principal: Principal,
    pub center_id: CenterId,
    pub review_id: ReviewId,
}

/// Handler for deleting a review answer.
pub struct DeleteReviewAnswerHandler {
    centers: Arc<dyn CenterRepository>,
    reviews: Arc<dyn ReviewReader>,
    answers: Arc<dyn ReviewAnswerRepository>,
}

impl DeleteReviewAnswerHandler {
    pub fn new(
        centers: Arc<dyn CenterRepository>,
        reviews: Arc<dyn ReviewReader>,
        answers: Arc<dyn ReviewAnswerRepository>,
    ) -> Self {
        Self {
            centers,
            reviews,
            answers,
        }
    }

    pub async fn handle(&self, command: DeleteReviewAnswerCommand) -> Result<(), DomainError> {
        let head = resolve_owned_review(
            self.centers.as_ref(),
            self.reviews.as_ref(),
            &command.principal,
            &command.center_id,
            &command.review_id,
        )
        .await?;

        let answer = self
            .answers
            .find_by_review(&head.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::AnswerNotFound, "Answer not found"))?;

        self.answers.delete(&answer.id).await?;

        Ok(())
    }
}
