//! PostgreSQL implementation of ReviewAnswerRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::center::ReviewAnswer;
use crate::domain::foundation::{AnswerId, DomainError, ErrorCode, ReviewId, Timestamp};
use crate::ports::ReviewAnswerRepository;

pub struct PostgresReviewAnswerRepository {
    pool: PgPool,
}

impl PostgresReviewAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AnswerRow {
    id: Uuid,
    review_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<AnswerRow> for ReviewAnswer {
    fn from(row: AnswerRow) -> Self {
        ReviewAnswer {
            id: AnswerId::from_uuid(row.id),
            review_id: ReviewId::from_uuid(row.review_id),
            content: row.content,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl ReviewAnswerRepository for PostgresReviewAnswerRepository {
    async fn find_by_review(
        &self,
        review_id: &ReviewId,
    ) -> Result<Option<ReviewAnswer>, DomainError> {
        let row: Option<AnswerRow> = sqlx::query_as(
            "SELECT id, review_id, content, created_at FROM review_answers WHERE review_id = $1",
        )
        .bind(review_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to find answer", e))?;

        Ok(row.map(ReviewAnswer::from))
    }

    async fn save(&self, answer: &ReviewAnswer) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO review_answers (id, review_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(answer.id.as_uuid())
        .bind(answer.review_id.as_uuid())
        .bind(&answer.content)
        .bind(answer.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                // One answer per review; the unique index backs the invariant.
                if db.constraint() == Some("review_answers_review_id_key") {
                    return DomainError::new(
                        ErrorCode::AnswerAlreadyExists,
                        "Review already has an answer",
                    );
                }
            }
            db_err("Failed to save answer", e)
        })?;

        Ok(())
    }

    async fn update(&self, answer: &ReviewAnswer) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE review_answers SET content = $2 WHERE id = $1")
            .bind(answer.id.as_uuid())
            .bind(&answer.content)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update answer", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AnswerNotFound,
                "Answer not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &AnswerId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM review_answers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete answer", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AnswerNotFound,
                "Answer not found",
            ));
        }

        Ok(())
    }
}
