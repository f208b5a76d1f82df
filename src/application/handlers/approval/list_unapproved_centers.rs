//! ListUnapprovedCentersHandler - admin queue of pending centers.

use std::sync::Arc;

use crate::domain::center::{Center, ProofParent};
use crate::domain::foundation::{DomainError, Principal};
use crate::ports::{ApprovedFileRepository, CenterRepository};

/// Query for the pending-center queue.
#[derive(Debug, Clone)]
pub struct ListUnapprovedCentersQuery {
    pub principal: Principal,
}

/// One pending center joined with its proof-file URLs.
#[derive(Debug, Clone)]
pub struct UnapprovedCenter {
    pub center: Center,
    pub proof_urls: Vec<String>,
}

/// Handler for listing centers awaiting an approval decision.
pub struct ListUnapprovedCentersHandler {
    centers: Arc<dyn CenterRepository>,
    files: Arc<dyn ApprovedFileRepository>,
}

impl ListUnapprovedCentersHandler {
    pub fn new(centers: Arc<dyn CenterRepository>, files: Arc<dyn ApprovedFileRepository>) -> Self {
        Self { centers, files }
    }

    pub async fn handle(
        &self,
        query: ListUnapprovedCentersQuery,
    ) -> Result<Vec<UnapprovedCenter>, DomainError> {
        query.principal.require_admin()?;

        let pending = self.centers.find_all_unapproved().await?;

        let mut result = Vec::with_capacity(pending.len());
        for center in pending {
            let proof_urls = self
                .files
                .find_all_by_parent(&ProofParent::Center(center.id))
                .await?
                .into_iter()
                .map(|f| f.url)
                .collect();
            result.push(UnapprovedCenter { center, proof_urls });
        }

        Ok(result)
    }
}
