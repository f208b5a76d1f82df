//! PostgreSQL implementation of LectorRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, LectorId, Timestamp, UserId};
use crate::domain::lector::Lector;
use crate::ports::LectorRepository;

pub struct PostgresLectorRepository {
    pool: PgPool,
}

impl PostgresLectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LectorRow {
    id: Uuid,
    user_id: Uuid,
    is_setter: bool,
    approved: bool,
    contests: Vec<String>,
    certificates: Vec<String>,
    careers: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<LectorRow> for Lector {
    fn from(row: LectorRow) -> Self {
        Lector {
            id: LectorId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            is_setter: row.is_setter,
            approved: row.approved,
            contests: row.contests,
            certificates: row.certificates,
            careers: row.careers,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl LectorRepository for PostgresLectorRepository {
    async fn find_by_id(&self, id: &LectorId) -> Result<Option<Lector>, DomainError> {
        let row: Option<LectorRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, is_setter, approved, contests, certificates, careers, created_at
            FROM lectors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to find lector", e))?;

        Ok(row.map(Lector::from))
    }

    async fn save(&self, lector: &Lector) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO lectors (id, user_id, is_setter, approved, contests, certificates, careers, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                is_setter = EXCLUDED.is_setter,
                approved = EXCLUDED.approved,
                contests = EXCLUDED.contests,
                certificates = EXCLUDED.certificates,
                careers = EXCLUDED.careers
            "#,
        )
        .bind(lector.id.as_uuid())
        .bind(lector.user_id.as_uuid())
        .bind(lector.is_setter)
        .bind(lector.approved)
        .bind(&lector.contests)
        .bind(&lector.certificates)
        .bind(&lector.careers)
        .bind(lector.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to save lector", e))?;

        Ok(())
    }

    async fn delete(&self, id: &LectorId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM lectors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete lector", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LectorNotFound,
                "Lector not found",
            ));
        }

        Ok(())
    }

    async fn find_all_unapproved(&self) -> Result<Vec<Lector>, DomainError> {
        let rows: Vec<LectorRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, is_setter, approved, contests, certificates, careers, created_at
            FROM lectors
            WHERE approved = FALSE
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list unapproved lectors", e))?;

        Ok(rows.into_iter().map(Lector::from).collect())
    }
}
