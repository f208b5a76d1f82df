//! CreateReviewAnswerHandler - posts the center's answer to a review.

use std::sync::Arc;

use crate::domain::center::ReviewAnswer;
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Principal, ReviewId};
use crate::ports::{CenterRepository, ReviewAnswerRepository, ReviewReader};

use super::resolve_owned_review;

/// Command to answer a review. A review takes at most one answer.
#[derive(Debug, Clone)]
pub struct CreateReviewAnswerCommand {
    pub principal: Principal,
    pub center_id: CenterId,
    pub review_id: ReviewId,
    pub content: String,
}

/// Handler for answering a review.
pub struct CreateReviewAnswerHandler {
    centers: Arc<dyn CenterRepository>,
    reviews: Arc<dyn ReviewReader>,
    answers: Arc<dyn ReviewAnswerRepository>,
}

impl CreateReviewAnswerHandler {
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

    pub async fn handle(
        &self,
        command: CreateReviewAnswerCommand,
    ) -> Result<ReviewAnswer, DomainError> {
        let head = resolve_owned_review(
            self.centers.as_ref(),
            self.reviews.as_ref(),
            &command.principal,
            &command.center_id,
            &command.review_id,
        )
        .await?;

        if self.answers.find_by_review(&head.id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::AnswerAlreadyExists,
                "Review already has an answer",
            ));
        }

        let answer = ReviewAnswer::new(head.id, command.content);
        self.answers.save(&answer).await?;

        Ok(answer)
    }
}
