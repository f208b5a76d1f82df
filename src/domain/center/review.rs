//! Review answer entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerId, ReviewId, Timestamp};

/// The center's reply to a review.
///
/// At most one answer exists per review; creation fails once one exists
/// and update/delete require one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnswer {
    pub id: AnswerId,
    pub review_id: ReviewId,
    pub content: String,
    pub created_at: Timestamp,
}

impl ReviewAnswer {
    pub fn new(review_id: ReviewId, content: impl Into<String>) -> Self {
        Self {
            id: AnswerId::new(),
            review_id,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }
}
