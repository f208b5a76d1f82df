//! Center fee entity and bulk-replace reconciliation.
//!
//! A fee is one priced membership plan offered by a center. Deletion is
//! soft only: issued-membership history elsewhere in the system references
//! fee rows, so `is_deleted` flips to true and the row stays.
//!
//! Fee updates are full-replace-by-diff: the caller submits the complete
//! desired set, [`reconcile_fees`] splits it against the persisted set into
//! rows to physically delete and rows to upsert.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CenterId, DomainError, ErrorCode, FeeId};

/// Billing period unit for a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    Day,
    Week,
    Month,
    Year,
}

/// One priced membership plan offered by a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterFee {
    pub id: FeeId,
    pub center_id: CenterId,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// Number of admissions the plan grants.
    pub count: i32,
    /// Validity length, in units of `period_type`.
    pub period: i32,
    pub period_type: PeriodType,
    pub is_deleted: bool,
}

impl CenterFee {
    /// Soft-deletes the fee.
    ///
    /// Fails with `AlreadyDeleted` when the fee was soft-deleted before;
    /// a fee is never deleted twice.
    pub fn soft_delete(&mut self) -> Result<(), DomainError> {
        if self.is_deleted {
            return Err(DomainError::new(
                ErrorCode::AlreadyDeleted,
                "Fee has already been deleted",
            )
            .with_detail("fee_id", self.id.to_string()));
        }
        self.is_deleted = true;
        Ok(())
    }
}

/// Outcome of diffing a desired fee set against the persisted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeReconciliation {
    /// Persisted fees absent from the desired set; physically deleted.
    pub to_delete: Vec<FeeId>,
    /// The complete desired set; inserted or replaced by id.
    pub to_upsert: Vec<CenterFee>,
}

/// Diffs the desired set against the persisted set by fee id.
pub fn reconcile_fees(persisted: &[CenterFee], desired: Vec<CenterFee>) -> FeeReconciliation {
    let to_delete = persisted
        .iter()
        .filter(|fee| !desired.iter().any(|d| d.id == fee.id))
        .map(|fee| fee.id)
        .collect();

    FeeReconciliation {
        to_delete,
        to_upsert: desired,
    }
}
