//! Proof documents attached to an approval request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CenterId, FileId, LectorId};

/// Parent of a proof file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ProofParent {
    Center(CenterId),
    Lector(LectorId),
}

/// A proof-document URL uploaded during sign-up.
///
/// Deleted (record and blob) when the parent's approval workflow reaches
/// a terminal decision; neither approval nor rejection needs the proof
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedFile {
    pub id: FileId,
    pub parent: ProofParent,
    pub url: String,
}

impl ApprovedFile {
    pub fn for_center(center_id: CenterId, url: impl Into<String>) -> Self {
        Self {
            id: FileId::new(),
            parent: ProofParent::Center(center_id),
            url: url.into(),
        }
    }

    pub fn for_lector(lector_id: LectorId, url: impl Into<String>) -> Self {
        Self {
            id: FileId::new(),
            parent: ProofParent::Lector(lector_id),
            url: url.into(),
        }
    }
}
