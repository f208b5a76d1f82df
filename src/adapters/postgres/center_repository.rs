//! PostgreSQL implementation of CenterRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::center::Center;
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::CenterRepository;

pub struct PostgresCenterRepository {
    pool: PgPool,
}

impl PostgresCenterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CenterRow {
    id: Uuid,
    owner_user_id: Option<Uuid>,
    name: String,
    approved: bool,
    fee_image_urls: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<CenterRow> for Center {
    fn from(row: CenterRow) -> Self {
        Center {
            id: CenterId::from_uuid(row.id),
            owner_user_id: row.owner_user_id.map(UserId::from_uuid),
            name: row.name,
            approved: row.approved,
            fee_image_urls: row.fee_image_urls,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl CenterRepository for PostgresCenterRepository {
    async fn find_by_id(&self, id: &CenterId) -> Result<Option<Center>, DomainError> {
        let row: Option<CenterRow> = sqlx::query_as(
            r#"
            SELECT id, owner_user_id, name, approved, fee_image_urls, created_at
            FROM centers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to find center", e))?;

        Ok(row.map(Center::from))
    }

    async fn save(&self, center: &Center) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO centers (id, owner_user_id, name, approved, fee_image_urls, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                owner_user_id = EXCLUDED.owner_user_id,
                name = EXCLUDED.name,
                approved = EXCLUDED.approved,
                fee_image_urls = EXCLUDED.fee_image_urls
            "#,
        )
        .bind(center.id.as_uuid())
        .bind(center.owner_user_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&center.name)
        .bind(center.approved)
        .bind(&center.fee_image_urls)
        .bind(center.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to save center", e))?;

        Ok(())
    }

    async fn delete(&self, id: &CenterId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM centers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete center", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CenterNotFound,
                "Center not found",
            ));
        }

        Ok(())
    }

    async fn find_all_unapproved(&self) -> Result<Vec<Center>, DomainError> {
        let rows: Vec<CenterRow> = sqlx::query_as(
            r#"
            SELECT id, owner_user_id, name, approved, fee_image_urls, created_at
            FROM centers
            WHERE approved = FALSE
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list unapproved centers", e))?;

        Ok(rows.into_iter().map(Center::from).collect())
    }

    async fn exists_approved_with_name(&self, name: &str) -> Result<bool, DomainError> {
        let exists: Option<(bool,)> = sqlx::query_as(
            "SELECT TRUE FROM centers WHERE name = $1 AND approved = TRUE LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to check approved center name", e))?;

        Ok(exists.is_some())
    }
}
