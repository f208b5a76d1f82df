//! Lector repository port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LectorId};
use crate::domain::lector::Lector;

/// Repository port for Lector aggregate persistence.
#[async_trait]
pub trait LectorRepository: Send + Sync {
    /// Find a lector by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &LectorId) -> Result<Option<Lector>, DomainError>;

    /// Persist the current state of a lector (insert or replace).
    async fn save(&self, lector: &Lector) -> Result<(), DomainError>;

    /// Hard-delete a lector record (rejection workflow).
    async fn delete(&self, id: &LectorId) -> Result<(), DomainError>;

    /// All lectors still awaiting an approval decision, in insertion order.
    async fn find_all_unapproved(&self) -> Result<Vec<Lector>, DomainError>;
}
