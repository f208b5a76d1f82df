//! ApproveCenterHandler - admin approval of a pending center.

use std::sync::Arc;

use crate::domain::center::{Center, ProofParent};
use crate::domain::foundation::{CenterId, DomainError, ErrorCode, Principal, Role};
use crate::ports::{ApprovedFileRepository, BlobStorage, CenterRepository, UserRepository};

use super::cleanup_proof_files;

/// Command to approve a pending center.
#[derive(Debug, Clone)]
pub struct ApproveCenterCommand {
    pub principal: Principal,
    pub center_id: CenterId,
}

/// Handler for center approval.
///
/// Checks run top-down: admin role, existence, duplicate approved name.
/// On success the center is approved, the owning user becomes a
/// `center_admin`, and the proof documents are discarded.
pub struct ApproveCenterHandler {
    centers: Arc<dyn CenterRepository>,
    users: Arc<dyn UserRepository>,
    files: Arc<dyn ApprovedFileRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl ApproveCenterHandler {
    pub fn new(
        centers: Arc<dyn CenterRepository>,
        users: Arc<dyn UserRepository>,
        files: Arc<dyn ApprovedFileRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            centers,
            users,
            files,
            blobs,
        }
    }

    pub async fn handle(&self, cmd: ApproveCenterCommand) -> Result<Center, DomainError> {
        cmd.principal.require_admin()?;

        let mut center = self
            .centers
            .find_by_id(&cmd.center_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CenterNotFound, "Center not found"))?;

        if self.centers.exists_approved_with_name(&center.name).await? {
            return Err(DomainError::new(
                ErrorCode::DuplicatedName,
                "An approved center with this name already exists",
            )
            .with_detail("name", center.name.clone()));
        }

        let owner = center.owner_user_id.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                "Pending center has no owning user",
            )
        })?;

        center.approve();
        self.centers.save(&center).await?;
        self.users.update_role(&owner, Role::CenterAdmin).await?;

        cleanup_proof_files(
            self.files.as_ref(),
            self.blobs.as_ref(),
            ProofParent::Center(center.id),
        )
        .await;

        Ok(center)
    }
}
