//! Fee repository port.
//!
//! Supports both the soft-delete path (`update`) and the bulk
//! replace-by-diff path (`delete_all` + `upsert_all`) of the fee
//! lifecycle.

use async_trait::async_trait;

use crate::domain::center::CenterFee;
use crate::domain::foundation::{CenterId, DomainError, FeeId};

/// Repository port for center fee persistence.
#[async_trait]
pub trait FeeRepository: Send + Sync {
    /// All fee rows for a center, soft-deleted ones included.
    async fn find_all_by_center(&self, center_id: &CenterId) -> Result<Vec<CenterFee>, DomainError>;

    /// Find one fee within a center.
    ///
    /// Returns `None` when the fee does not exist or belongs to another
    /// center.
    async fn find_by_id_in_center(
        &self,
        center_id: &CenterId,
        fee_id: &FeeId,
    ) -> Result<Option<CenterFee>, DomainError>;

    /// Persist the current state of an existing fee row.
    async fn update(&self, fee: &CenterFee) -> Result<(), DomainError>;

    /// Insert-or-replace every fee in the set, keyed by id.
    async fn upsert_all(&self, fees: &[CenterFee]) -> Result<(), DomainError>;

    /// Physically delete the given fee rows.
    ///
    /// Only the replace-by-diff update uses this; user-facing deletion is
    /// always soft.
    async fn delete_all(&self, ids: &[FeeId]) -> Result<(), DomainError>;
}
