//! ApproveLectorHandler - admin approval of a pending lector.

use std::sync::Arc;

use crate::domain::center::ProofParent;
use crate::domain::foundation::{DomainError, ErrorCode, LectorId, Principal, Role};
use crate::domain::lector::Lector;
use crate::ports::{ApprovedFileRepository, BlobStorage, LectorRepository, UserRepository};

use super::cleanup_proof_files;

/// Command to approve a pending lector.
#[derive(Debug, Clone)]
pub struct ApproveLectorCommand {
    pub principal: Principal,
    pub lector_id: LectorId,
}

/// Handler for lector approval.
///
/// On success the lector is approved, the applying user's role becomes
/// `lector`, and the proof documents are discarded.
pub struct ApproveLectorHandler {
    lectors: Arc<dyn LectorRepository>,
    users: Arc<dyn UserRepository>,
    files: Arc<dyn ApprovedFileRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl ApproveLectorHandler {
    pub fn new(
        lectors: Arc<dyn LectorRepository>,
        users: Arc<dyn UserRepository>,
        files: Arc<dyn ApprovedFileRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            lectors,
            users,
            files,
            blobs,
        }
    }

    pub async fn handle(&self, cmd: ApproveLectorCommand) -> Result<Lector, DomainError> {
        cmd.principal.require_admin()?;

        let mut lector = self
            .lectors
            .find_by_id(&cmd.lector_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::LectorNotFound, "Lector not found"))?;

        lector.approve();
        self.lectors.save(&lector).await?;
        self.users.update_role(&lector.user_id, Role::Lector).await?;

        cleanup_proof_files(
            self.files.as_ref(),
            self.blobs.as_ref(),
            ProofParent::Lector(lector.id),
        )
        .await;

        Ok(lector)
    }
}
