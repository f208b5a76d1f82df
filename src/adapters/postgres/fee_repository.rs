//! PostgreSQL implementation of FeeRepository.
//!
//! The `period_type` column is a plain text enum; parse failures surface
//! as `DatabaseError` because they mean the row was written by a newer or
//! corrupted schema.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::center::{CenterFee, PeriodType};
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, FeeId};
use crate::ports::FeeRepository;

pub struct PostgresFeeRepository {
    pool: PgPool,
}

impl PostgresFeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FeeRow {
    id: Uuid,
    center_id: Uuid,
    name: String,
    price: i64,
    count: i32,
    period: i32,
    period_type: String,
    is_deleted: bool,
}

impl TryFrom<FeeRow> for CenterFee {
    type Error = DomainError;

    fn try_from(row: FeeRow) -> Result<Self, Self::Error> {
        Ok(CenterFee {
            id: FeeId::from_uuid(row.id),
            center_id: CenterId::from_uuid(row.center_id),
            name: row.name,
            price: row.price,
            count: row.count,
            period: row.period,
            period_type: parse_period_type(&row.period_type)?,
            is_deleted: row.is_deleted,
        })
    }
}

fn parse_period_type(s: &str) -> Result<PeriodType, DomainError> {
    match s {
        "day" => Ok(PeriodType::Day),
        "week" => Ok(PeriodType::Week),
        "month" => Ok(PeriodType::Month),
        "year" => Ok(PeriodType::Year),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid period_type value: {}", s),
        )),
    }
}

fn period_type_to_string(period_type: &PeriodType) -> &'static str {
    match period_type {
        PeriodType::Day => "day",
        PeriodType::Week => "week",
        PeriodType::Month => "month",
        PeriodType::Year => "year",
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl FeeRepository for PostgresFeeRepository {
    async fn find_all_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<CenterFee>, DomainError> {
        let rows: Vec<FeeRow> = sqlx::query_as(
            r#"
            SELECT id, center_id, name, price, count, period, period_type, is_deleted
            FROM center_fees
            WHERE center_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(center_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list fees", e))?;

        rows.into_iter().map(CenterFee::try_from).collect()
    }

    async fn find_by_id_in_center(
        &self,
        center_id: &CenterId,
        fee_id: &FeeId,
    ) -> Result<Option<CenterFee>, DomainError> {
        let row: Option<FeeRow> = sqlx::query_as(
            r#"
            SELECT id, center_id, name, price, count, period, period_type, is_deleted
            FROM center_fees
            WHERE id = $1 AND center_id = $2
            "#,
        )
        .bind(fee_id.as_uuid())
        .bind(center_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to find fee", e))?;

        row.map(CenterFee::try_from).transpose()
    }

    async fn update(&self, fee: &CenterFee) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE center_fees SET
                name = $2,
                price = $3,
                count = $4,
                period = $5,
                period_type = $6,
                is_deleted = $7
            WHERE id = $1
            "#,
        )
        .bind(fee.id.as_uuid())
        .bind(&fee.name)
        .bind(fee.price)
        .bind(fee.count)
        .bind(fee.period)
        .bind(period_type_to_string(&fee.period_type))
        .bind(fee.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update fee", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::FeeNotFound, "Fee not found"));
        }

        Ok(())
    }

    async fn upsert_all(&self, fees: &[CenterFee]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_err("Failed to start fee upsert", e))?;

        for fee in fees {
            sqlx::query(
                r#"
                INSERT INTO center_fees (id, center_id, name, price, count, period, period_type, is_deleted)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO UPDATE SET
                    name = EXCLUDED.name,
                    price = EXCLUDED.price,
                    count = EXCLUDED.count,
                    period = EXCLUDED.period,
                    period_type = EXCLUDED.period_type,
                    is_deleted = EXCLUDED.is_deleted
                "#,
            )
            .bind(fee.id.as_uuid())
            .bind(fee.center_id.as_uuid())
            .bind(&fee.name)
            .bind(fee.price)
            .bind(fee.count)
            .bind(fee.period)
            .bind(period_type_to_string(&fee.period_type))
            .bind(fee.is_deleted)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_err("Failed to upsert fee", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_err("Failed to commit fee upsert", e))
    }

    async fn delete_all(&self, ids: &[FeeId]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        sqlx::query("DELETE FROM center_fees WHERE id = ANY($1)")
            .bind(&uuids)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete fees", e))?;

        Ok(())
    }
}
