//! RejectLectorHandler - admin rejection of a pending lector.

use std::sync::Arc;

use crate::domain::center::ProofParent;
use crate::domain::foundation::{DomainError, ErrorCode, LectorId, Principal};
use crate::ports::{ApprovedFileRepository, BlobStorage, LectorRepository};

use super::cleanup_proof_files;

/// Command to reject a pending lector.
#[derive(Debug, Clone)]
pub struct RejectLectorCommand {
    pub principal: Principal,
    pub lector_id: LectorId,
}

/// Handler for lector rejection: discard proof documents, then hard-delete
/// the application record.
pub struct RejectLectorHandler {
    lectors: Arc<dyn LectorRepository>,
    files: Arc<dyn ApprovedFileRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl RejectLectorHandler {
    pub fn new(
        lectors: Arc<dyn LectorRepository>,
        files: Arc<dyn ApprovedFileRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            lectors,
            files,
            blobs,
        }
    }

    pub async fn handle(&self, cmd: RejectLectorCommand) -> Result<(), DomainError> {
        cmd.principal.require_admin()?;

        let lector = self
            .lectors
            .find_by_id(&cmd.lector_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::LectorNotFound, "Lector not found"))?;

        cleanup_proof_files(
            self.files.as_ref(),
            self.blobs.as_ref(),
            ProofParent::Lector(lector.id),
        )
        .await;

        self.lectors.delete(&lector.id).await
    }
}
