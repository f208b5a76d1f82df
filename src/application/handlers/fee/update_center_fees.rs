//! UpdateCenterFeesHandler - full replace-by-diff of a center's fee set.

use std::sync::Arc;

use crate::domain::center::{reconcile_fees, CenterFee};
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, OwnedByUser, Principal};
use crate::ports::{CenterRepository, FeeRepository};

/// Command carrying the complete desired fee set.
///
/// This is not an incremental patch: persisted fees absent from
/// `desired_fees` are physically deleted, and the fee page images are
/// replaced wholesale.
#[derive(Debug, Clone)]
pub struct UpdateCenterFeesCommand {
    pub principal: Principal,
    pub center_id: CenterId,
    pub desired_fees: Vec<CenterFee>,
    pub fee_image_urls: Vec<String>,
}

/// Reconciled fee detail view returned after the update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeDetail {
    pub fees: Vec<CenterFee>,
    pub fee_image_urls: Vec<String>,
}

/// Handler for the bulk fee update.
pub struct UpdateCenterFeesHandler {
    centers: Arc<dyn CenterRepository>,
    fees: Arc<dyn FeeRepository>,
}

impl UpdateCenterFeesHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, fees: Arc<dyn FeeRepository>) -> Self {
        Self { centers, fees }
    }

    pub async fn handle(&self, cmd: UpdateCenterFeesCommand) -> Result<FeeDetail, DomainError> {
        let mut center = self
            .centers
            .find_by_id(&cmd.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        center.check_ownership(&cmd.principal)?;

        let persisted = self.fees.find_all_by_center(&cmd.center_id).await?;
        let plan = reconcile_fees(&persisted, cmd.desired_fees);

        self.fees.delete_all(&plan.to_delete).await?;
        self.fees.upsert_all(&plan.to_upsert).await?;

        center.replace_fee_images(cmd.fee_image_urls);
        self.centers.save(&center).await?;

        Ok(FeeDetail {
            fees: plan.to_upsert,
            fee_image_urls: center.fee_image_urls,
        })
    }
}
