//! Proof-file repository port.

use async_trait::async_trait;

use crate::domain::center::{ApprovedFile, ProofParent};
use crate::domain::foundation::DomainError;

/// Repository port for proof-file records.
#[async_trait]
pub trait ApprovedFileRepository: Send + Sync {
    /// All proof files attached to the given parent.
    async fn find_all_by_parent(
        &self,
        parent: &ProofParent,
    ) -> Result<Vec<ApprovedFile>, DomainError>;

    /// Delete every proof-file record attached to the given parent.
    ///
    /// Called once the parent's approval workflow reaches a terminal
    /// decision; the blob objects themselves are deleted separately.
    async fn delete_all_by_parent(&self, parent: &ProofParent) -> Result<(), DomainError>;
}
