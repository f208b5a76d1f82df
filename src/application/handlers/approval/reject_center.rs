//! RejectCenterHandler - admin rejection of a pending center.

use std::sync::Arc;

use crate::domain::center::ProofParent;
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Principal};
use crate::ports::{ApprovedFileRepository, BlobStorage, CenterRepository};

use super::cleanup_proof_files;

/// Command to reject a pending center.
#[derive(Debug, Clone)]
pub struct RejectCenterCommand {
    pub principal: Principal,
    pub center_id: CenterId,
}

/// Handler for center rejection.
///
/// Rejection is terminal: the proof documents are discarded and the
/// center record itself is hard-deleted. Nothing references an
/// unapproved center yet, so no soft delete is needed here.
pub struct RejectCenterHandler {
    centers: Arc<dyn CenterRepository>,
    files: Arc<dyn ApprovedFileRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl RejectCenterHandler {
    pub fn new(
        centers: Arc<dyn CenterRepository>,
        files: Arc<dyn ApprovedFileRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            centers,
            files,
            blobs,
        }
    }

    pub async fn handle(&self, cmd: RejectCenterCommand) -> Result<(), DomainError> {
        cmd.principal.require_admin()?;

        let center = self
            .centers
            .find_by_id(&cmd.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        cleanup_proof_files(
            self.files.as_ref(),
            self.blobs.as_ref(),
            ProofParent::Center(center.id),
        )
        .await;

        self.centers.delete(&center.id).await
    }
}
