//! Mock answer repository for the review answer handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::center::ReviewAnswer;
use crate::domain::foundation::{AnswerId, DomainError, ReviewId};
use crate::ports::ReviewAnswerRepository;

pub struct MockReviewAnswerRepository {
    pub answers: Mutex<Vec<ReviewAnswer>>,
}

impl MockReviewAnswerRepository {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(Vec::new()),
        }
    }

    pub fn with_answer(answer: ReviewAnswer) -> Self {
        Self {
            answers: Mutex::new(vec![answer]),
        }
    }
}

#[async_trait]
impl ReviewAnswerRepository for MockReviewAnswerRepository {
    async fn find_by_review(
        &self,
        review_id: &ReviewId,
    ) -> Result<Option<ReviewAnswer>, DomainError> {
        Ok(self
            .answers
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.review_id == review_id)
            .cloned())
    }

    async fn save(&self, answer: &ReviewAnswer) -> Result<(), DomainError> {
        self.answers.lock().unwrap().push(answer.clone());
        Ok(())
    }

    async fn update(&self, answer: &ReviewAnswer) -> Result<(), DomainError> {
        let mut answers = self.answers.lock().unwrap();
        if let Some(existing) = answers.iter_mut().find(|a| a.id == answer.id) {
            *existing = answer.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &AnswerId) -> Result<(), DomainError> {
        self.answers.lock().unwrap().retain(|a| &a.id != id);
        Ok(())
    }
}
