//! DeleteCenterFeeHandler - owner soft-deletes one fee.

use std::sync::Arc;

use crate::domain::center::CenterFee;
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, FeeId, OwnedByUser, Principal};
use crate::ports::{CenterRepository, FeeRepository};

/// Command to soft-delete a fee within a center.
#[derive(Debug, Clone)]
pub struct DeleteCenterFeeCommand {
    pub principal: Principal,
    pub center_id: CenterId,
    pub fee_id: FeeId,
}

/// Handler for fee soft-deletion.
///
/// The row is never physically removed; a second deletion of the same fee
/// fails with `AlreadyDeleted`.
pub struct DeleteCenterFeeHandler {
    centers: Arc<dyn CenterRepository>,
    fees: Arc<dyn FeeRepository>,
}

impl DeleteCenterFeeHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, fees: Arc<dyn FeeRepository>) -> Self {
        Self { centers, fees }
    }

    pub async fn handle(&self, cmd: DeleteCenterFeeCommand) -> Result<CenterFee, DomainError> {
        let center = self
            .centers
            .find_by_id(&cmd.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&cmd.principal)?;

        let mut fee = self
            .fees
            .find_by_id_in_center(&cmd.center_id, &cmd.fee_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::FeeNotFound, "Fee not found"))?;

        fee.soft_delete()?;
        self.fees.update(&fee).await?;

        Ok(fee)
    }
}
