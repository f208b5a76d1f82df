//! Center repository port (write side).

use async_trait::async_trait;

use crate::domain::center::Center;
use crate::domain::foundation::{CenterId, DomainError};

/// Repository port for Center aggregate persistence.
#[async_trait]
pub trait CenterRepository: Send + Sync {
    /// Find a center by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CenterId) -> Result<Option<Center>, DomainError>;

    /// Persist the current state of a center (insert or replace).
    async fn save(&self, center: &Center) -> Result<(), DomainError>;

    /// Hard-delete a center record.
    ///
    /// Only used by the rejection workflow, while the center is still
    /// unapproved and nothing references it.
    async fn delete(&self, id: &CenterId) -> Result<(), DomainError>;

    /// All centers still awaiting an approval decision, in insertion order.
    async fn find_all_unapproved(&self) -> Result<Vec<Center>, DomainError>;

    /// Whether an approved center with this exact name already exists.
    async fn exists_approved_with_name(&self, name: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CenterRepository) {}
    }
}
