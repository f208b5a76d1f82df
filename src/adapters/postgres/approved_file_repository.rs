//! PostgreSQL implementation of ApprovedFileRepository.
//!
//! The polymorphic parent is stored as a `(parent_kind, parent_id)` pair;
//! `parent_kind` is either `center` or `lector`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::center::{ApprovedFile, ProofParent};
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, FileId, LectorId};
use crate::ports::ApprovedFileRepository;

pub struct PostgresApprovedFileRepository {
    pool: PgPool,
}

impl PostgresApprovedFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApprovedFileRow {
    id: Uuid,
    parent_kind: String,
    parent_id: Uuid,
    url: String,
}

impl TryFrom<ApprovedFileRow> for ApprovedFile {
    type Error = DomainError;

    fn try_from(row: ApprovedFileRow) -> Result<Self, Self::Error> {
        let parent = match row.parent_kind.as_str() {
            "center" => ProofParent::Center(CenterId::from_uuid(row.parent_id)),
            "lector" => ProofParent::Lector(LectorId::from_uuid(row.parent_id)),
            other => {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid parent_kind value: {}", other),
                ))
            }
        };

        Ok(ApprovedFile {
            id: FileId::from_uuid(row.id),
            parent,
            url: row.url,
        })
    }
}

fn parent_columns(parent: &ProofParent) -> (&'static str, Uuid) {
    match parent {
        ProofParent::Center(id) => ("center", *id.as_uuid()),
        ProofParent::Lector(id) => ("lector", *id.as_uuid()),
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl ApprovedFileRepository for PostgresApprovedFileRepository {
    async fn find_all_by_parent(
        &self,
        parent: &ProofParent,
    ) -> Result<Vec<ApprovedFile>, DomainError> {
        let (kind, parent_id) = parent_columns(parent);

        let rows: Vec<ApprovedFileRow> = sqlx::query_as(
            r#"
            SELECT id, parent_kind, parent_id, url
            FROM approved_files
            WHERE parent_kind = $1 AND parent_id = $2
            "#,
        )
        .bind(kind)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list proof files", e))?;

        rows.into_iter().map(ApprovedFile::try_from).collect()
    }

    async fn delete_all_by_parent(&self, parent: &ProofParent) -> Result<(), DomainError> {
        let (kind, parent_id) = parent_columns(parent);

        sqlx::query("DELETE FROM approved_files WHERE parent_kind = $1 AND parent_id = $2")
            .bind(kind)
            .bind(parent_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete proof files", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_columns_split_kind_and_id() {
        let center_id = CenterId::new();
        let (kind, id) = parent_columns(&ProofParent::Center(center_id));
        assert_eq!(kind, "center");
        assert_eq!(id, *center_id.as_uuid());

        let lector_id = LectorId::new();
        let (kind, id) = parent_columns(&ProofParent::Lector(lector_id));
        assert_eq!(kind, "lector");
        assert_eq!(id, *lector_id.as_uuid());
    }

    #[test]
    fn row_with_unknown_kind_fails() {
        let row = ApprovedFileRow {
            id: Uuid::new_v4(),
            parent_kind: "post".to_string(),
            parent_id: Uuid::new_v4(),
            url: "https://example.com/proof.pdf".to_string(),
        };

        let err = ApprovedFile::try_from(row).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
