//! ListUnapprovedLectorsHandler - admin queue of pending lectors.

use std::sync::Arc;

use crate::domain::center::ProofParent;
use crate::domain::foundation::{DomainError, Principal};
use crate::domain::lector::Lector;
use crate::ports::{ApprovedFileRepository, LectorRepository};

/// Query for the pending-lector queue.
#[derive(Debug, Clone)]
pub struct ListUnapprovedLectorsQuery {
    pub principal: Principal,
}

/// One pending lector joined with its proof-file URLs.
#[derive(Debug, Clone)]
pub struct UnapprovedLector {
    pub lector: Lector,
    pub proof_urls: Vec<String>,
}

/// Handler for listing lectors awaiting an approval decision.
pub struct ListUnapprovedLectorsHandler {
    lectors: Arc<dyn LectorRepository>,
    files: Arc<dyn ApprovedFileRepository>,
}

impl ListUnapprovedLectorsHandler {
    pub fn new(lectors: Arc<dyn LectorRepository>, files: Arc<dyn ApprovedFileRepository>) -> Self {
        Self { lectors, files }
    }

    pub async fn handle(
        &self,
        query: ListUnapprovedLectorsQuery,
    ) -> Result<Vec<UnapprovedLector>, DomainError> {
        query.principal.require_admin()?;

        let pending = self.lectors.find_all_unapproved().await?;

        let mut result = Vec::with_capacity(pending.len());
        for lector in pending {
            let proof_urls = self
                .files
                .find_all_by_parent(&ProofParent::Lector(lector.id))
                .await?
                .into_iter()
                .map(|f| f.url)
                .collect();
            result.push(UnapprovedLector { lector, proof_urls });
        }

        Ok(result)
    }
}
