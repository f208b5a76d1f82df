//! Approval workflow handlers.
//!
//! Admin-only operations that move a center or lector registration out of
//! the pending state. Approval promotes the owning user's role; both
//! terminal decisions discard the uploaded proof documents.

mod approve_center;
mod approve_lector;
mod list_unapproved_centers;
mod list_unapproved_lectors;
mod reject_center;
mod reject_lector;

#[cfg(test)]
pub(crate) mod mocks;

pub use approve_center::{ApproveCenterCommand, ApproveCenterHandler};
pub use approve_lector::{ApproveLectorCommand, ApproveLectorHandler};
pub use list_unapproved_centers::{
    ListUnapprovedCentersHandler, ListUnapprovedCentersQuery, UnapprovedCenter,
};
pub use list_unapproved_lectors::{
    ListUnapprovedLectorsHandler, ListUnapprovedLectorsQuery, UnapprovedLector,
};
pub use reject_center::{RejectCenterCommand, RejectCenterHandler};
pub use reject_lector::{RejectLectorCommand, RejectLectorHandler};

use crate::domain::center::ProofParent;
use crate::ports::{ApprovedFileRepository, BlobStorage};

/// Deletes every proof file attached to `parent`, blob objects first, then
/// the records.
///
/// Cleanup is best-effort: the approval decision has already been taken
/// when this runs, and a half-failed cleanup must not void it, so every
/// failure is logged and swallowed.
pub(crate) async fn cleanup_proof_files(
    files: &dyn ApprovedFileRepository,
    blobs: &dyn BlobStorage,
    parent: ProofParent,
) {
    let attached = match files.find_all_by_parent(&parent).await {
        Ok(attached) => attached,
        Err(e) => {
            tracing::warn!(error = %e, ?parent, "failed to list proof files for cleanup");
            return;
        }
    };

    for file in &attached {
        if let Err(e) = blobs.delete(&file.url).await {
            tracing::warn!(error = %e, url = %file.url, "failed to delete proof blob");
        }
    }

    if let Err(e) = files.delete_all_by_parent(&parent).await {
        tracing::warn!(error = %e, ?parent, "failed to delete proof file records");
    }
}
