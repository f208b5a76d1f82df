//! Review answer handlers.
//!
//! A review carries at most one answer from the center. Creation fails
//! once an answer exists; update and delete require one.

mod create_review_answer;
mod delete_review_answer;
mod update_review_answer;

#[cfg(test)]
pub(crate) mod mocks;

pub use create_review_answer::{CreateReviewAnswerCommand, CreateReviewAnswerHandler};
pub use delete_review_answer::{DeleteReviewAnswerCommand, DeleteReviewAnswerHandler};
pub use update_review_answer::{UpdateReviewAnswerCommand, UpdateReviewAnswerHandler};

use crate::domain::foundation::{
    CenterId, DomainError, ErrorCode, OwnedByUser, Principal, ReviewId,
};
use crate::ports::{CenterRepository, ReviewHead, ReviewReader};

/// Resolves the center and review for an answer operation, running the
/// shared check sequence: center exists, principal owns it, review exists
/// and belongs to the center.
pub(crate) async fn resolve_owned_review(
    centers: &dyn CenterRepository,
    reviews: &dyn ReviewReader,
    principal: &Principal,
    center_id: &CenterId,
    review_id: &ReviewId,
) -> Result<ReviewHead, DomainError> {
    let center = centers
        .find_by_id(center_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

    center.check_ownership(principal)?;

    let head = reviews
        .find_head(review_id)
        .await?
        .filter(|head| &head.center_id == center_id)
        .ok_or_else(|| DomainError::new(ErrorCode::ReviewNotFound, "Review not found"))?;

    Ok(head)
}
