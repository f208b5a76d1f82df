//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Role, UserId};
use crate::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(user_id.as_uuid())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update user role", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found")
                .with_detail("user_id", user_id.to_string()));
        }

        Ok(())
    }
}
