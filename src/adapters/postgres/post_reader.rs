//! PostgreSQL implementation of PostReader.
//!
//! Read side only; posts are written by a different part of the system.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Page, PostId, Timestamp};
use crate::ports::{PostReader, PostView};

pub struct PostgresPostReader {
    pool: PgPool,
}

impl PostgresPostReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    image_urls: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for PostView {
    fn from(row: PostRow) -> Self {
        PostView {
            id: PostId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            image_urls: row.image_urls,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl PostReader for PostgresPostReader {
    async fn created_timestamps_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<Timestamp>, DomainError> {
        let rows: Vec<(DateTime<Utc>,)> =
            sqlx::query_as("SELECT created_at FROM posts WHERE center_id = $1")
                .bind(center_id.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_err("Failed to read post timestamps", e))?;

        Ok(rows
            .into_iter()
            .map(|(created_at,)| Timestamp::from_datetime(created_at))
            .collect())
    }

    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<PostView>, DomainError> {
        let (total_items,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM posts WHERE center_id = $1")
                .bind(center_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_err("Failed to count posts", e))?;

        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, image_urls, created_at
            FROM posts
            WHERE center_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(center_id.as_uuid())
        .bind(i64::from(page_size))
        .bind(i64::from(page_number) * i64::from(page_size))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list posts", e))?;

        Ok(Page {
            items: rows.into_iter().map(PostView::from).collect(),
            page_number,
            page_size,
            total_items: total_items as u64,
        })
    }
}
