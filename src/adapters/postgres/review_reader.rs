//! PostgreSQL implementation of ReviewReader.
//!
//! Joins the one-to-one answer in so review listings and the answered /
//! not-answered split need no second query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Page, ReviewId, Timestamp, UserId};
use crate::domain::reporting::ReviewRecord;
use crate::ports::{ReviewHead, ReviewReader, ReviewView};

pub struct PostgresReviewReader {
    pool: PgPool,
}

impl PostgresReviewReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    author_user_id: Uuid,
    content: String,
    tags: Vec<String>,
    answer: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for ReviewView {
    fn from(row: ReviewRow) -> Self {
        ReviewView {
            id: ReviewId::from_uuid(row.id),
            author_user_id: UserId::from_uuid(row.author_user_id),
            content: row.content,
            tags: row.tags,
            answer: row.answer,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl ReviewReader for PostgresReviewReader {
    async fn records_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<ReviewRecord>, DomainError> {
        let rows: Vec<(Vec<String>, bool)> = sqlx::query_as(
            r#"
            SELECT r.tags, a.id IS NOT NULL
            FROM reviews r
            LEFT JOIN review_answers a ON a.review_id = r.id
            WHERE r.center_id = $1
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(center_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to read review records", e))?;

        Ok(rows
            .into_iter()
            .map(|(tags, answered)| ReviewRecord { tags, answered })
            .collect())
    }

    async fn find_head(&self, review_id: &ReviewId) -> Result<Option<ReviewHead>, DomainError> {
        let row: Option<(Uuid, Uuid)> =
            sqlx::query_as("SELECT id, center_id FROM reviews WHERE id = $1")
                .bind(review_id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_err("Failed to find review", e))?;

        Ok(row.map(|(id, center_id)| ReviewHead {
            id: ReviewId::from_uuid(id),
            center_id: CenterId::from_uuid(center_id),
        }))
    }

    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<ReviewView>, DomainError> {
        let (total_items,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE center_id = $1")
                .bind(center_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_err("Failed to count reviews", e))?;

        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.author_user_id, r.content, r.tags, a.content AS answer, r.created_at
            FROM reviews r
            LEFT JOIN review_answers a ON a.review_id = r.id
            WHERE r.center_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(center_id.as_uuid())
        .bind(i64::from(page_size))
        .bind(i64::from(page_number) * i64::from(page_size))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list reviews", e))?;

        Ok(Page {
            items: rows.into_iter().map(ReviewView::from).collect(),
            page_number,
            page_size,
            total_items: total_items as u64,
        })
    }
}
