//! Review answer repository port.

use async_trait::async_trait;

use crate::domain::center::ReviewAnswer;
use crate::domain::foundation::{AnswerId, DomainError, ReviewId};

/// Repository port for the one-to-one review answer.
#[async_trait]
pub trait ReviewAnswerRepository: Send + Sync {
    /// The answer for a review, if one exists.
    async fn find_by_review(&self, review_id: &ReviewId)
        -> Result<Option<ReviewAnswer>, DomainError>;

    /// Insert a new answer.
    async fn save(&self, answer: &ReviewAnswer) -> Result<(), DomainError>;

    /// Persist the current state of an existing answer.
    async fn update(&self, answer: &ReviewAnswer) -> Result<(), DomainError>;

    /// Hard-delete an answer.
    async fn delete(&self, id: &AnswerId) -> Result<(), DomainError>;
}
