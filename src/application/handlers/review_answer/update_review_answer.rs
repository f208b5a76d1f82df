//! UpdateReviewAnswerHandler - rewrites an existing answer's content.

use std::sync::Arc;

use crate::domain::center::ReviewAnswer;
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Principal, ReviewId};
use crate::ports::{CenterRepository, ReviewAnswerRepository, ReviewReader};

use super::resolve_owned_review;

/// Command to rewrite the answer on a review.
#[derive(Debug, Clone)]
pub struct UpdateReviewAnswerCommand {
    pub principal: Principal,
    pub center_id: CenterId,
    pub review_id: ReviewId,
    pub content: String,
}

/// Handler for updating a review answer.
pub struct UpdateReviewAnswerHandler {
    centers: Arc<dyn CenterRepository>,
    reviews: Arc<dyn ReviewReader>,
    answers: Arc<dyn ReviewAnswerRepository>,
}

impl UpdateReviewAnswerHandler {
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
        command: UpdateReviewAnswerCommand,
    ) -> Result<ReviewAnswer, DomainError> {
        let head = resolve_owned_review(
            self.centers.as_ref(),
            self.reviews.as_ref(),
            &command.principal,
            &command.center_id,
            &command.review_id,
        )
        .await?;

        let mut answer = self
            .answers
            .find_by_review(&head.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::AnswerNotFound, "Answer not found"))?;

        answer.content = command.content;
        self.answers.update(&answer).await?;

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::approval::mocks::MockCenterRepository;
    use crate::application::handlers::reporting::mocks::MockReviewReader;
    use crate::application::handlers::review_answer::mocks::MockReviewAnswerRepository;
    use crate::domain::center::Center;
    use crate::domain::foundation::{Role, UserId};
    use crate::ports::ReviewHead;

    fn owner_principal(owner: UserId) -> Principal {
        Principal::new(owner, Role::CenterAdmin, "owner@example.com")
    }

    #[tokio::test]
    async fn rewrites_existing_answer() {
        let owner = UserId::new();
        let center = Center::register(CenterId::new(), owner, "Boulder House");
        let center_id = center.id;
        let review_id = ReviewId::new();

        let centers = Arc::new(MockCenterRepository::with_center(center));
        let reviews = Arc::new(MockReviewReader::with_head(ReviewHead {
            id: review_id,
            center_id,
        }));
        let answers = Arc::new(MockReviewAnswerRepository::with_answer(ReviewAnswer::new(
            review_id, "draft",
        )));

        let updated = UpdateReviewAnswerHandler::new(centers, reviews, answers.clone())
            .handle(UpdateReviewAnswerCommand {
                principal: owner_principal(owner),
                center_id,
                review_id,
                content: "final wording".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.content, "final wording");
        assert_eq!(
            answers.answers.lock().unwrap()[0].content,
            "final wording"
        );
    }

    #[tokio::test]
    async fn fails_without_existing_answer() {
        let owner = UserId::new();
        let center = Center::register(CenterId::new(), owner, "Boulder House");
        let center_id = center.id;
        let review_id = ReviewId::new();

        let centers = Arc::new(MockCenterRepository::with_center(center));
        let reviews = Arc::new(MockReviewReader::with_head(ReviewHead {
            id: review_id,
            center_id,
        }));
        let answers = Arc::new(MockReviewAnswerRepository::new());

        let err = UpdateReviewAnswerHandler::new(centers, reviews, answers)
            .handle(UpdateReviewAnswerCommand {
                principal: owner_principal(owner),
                center_id,
                review_id,
                content: "final wording".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AnswerNotFound);
    }

    #[tokio::test]
    async fn non_owner_cannot_update() {
        let center = Center::register(CenterId::new(), UserId::new(), "Boulder House");
        let center_id = center.id;
        let review_id = ReviewId::new();

        let centers = Arc::new(MockCenterRepository::with_center(center));
        let reviews = Arc::new(MockReviewReader::with_head(ReviewHead {
            id: review_id,
            center_id,
        }));
        let answers = Arc::new(MockReviewAnswerRepository::with_answer(ReviewAnswer::new(
            review_id, "draft",
        )));

        let err = UpdateReviewAnswerHandler::new(centers, reviews, answers.clone())
            .handle(UpdateReviewAnswerCommand {
                principal: owner_principal(UserId::new()),
                center_id,
                review_id,
                content: "hijacked".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(answers.answers.lock().unwrap()[0].content, "draft");
    }
}
