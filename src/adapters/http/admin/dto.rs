//! HTTP DTOs for the admin approval endpoints.

use serde::Serialize;

use crate::application::handlers::approval::{UnapprovedCenter, UnapprovedLector};
use crate::domain::center::Center;
use crate::domain::lector::Lector;

/// One center awaiting an approval decision, with its proof documents.
#[derive(Debug, Clone, Serialize)]
pub struct UnapprovedCenterResponse {
    pub id: String,
    pub name: String,
    pub owner_user_id: Option<String>,
    pub created_at: String,
    pub proof_urls: Vec<String>,
}

impl From<UnapprovedCenter> for UnapprovedCenterResponse {
    fn from(entry: UnapprovedCenter) -> Self {
        Self {
            id: entry.center.id.to_string(),
            name: entry.center.name,
            owner_user_id: entry.center.owner_user_id.map(|id| id.to_string()),
            created_at: entry.center.created_at.as_datetime().to_rfc3339(),
            proof_urls: entry.proof_urls,
        }
    }
}

/// One lector awaiting an approval decision, with its proof documents.
#[derive(Debug, Clone, Serialize)]
pub struct UnapprovedLectorResponse {
    pub id: String,
    pub user_id: String,
    pub is_setter: bool,
    pub contests: Vec<String>,
    pub certificates: Vec<String>,
    pub careers: Vec<String>,
    pub created_at: String,
    pub proof_urls: Vec<String>,
}

impl From<UnapprovedLector> for UnapprovedLectorResponse {
    fn from(entry: UnapprovedLector) -> Self {
        Self {
            id: entry.lector.id.to_string(),
            user_id: entry.lector.user_id.to_string(),
            is_setter: entry.lector.is_setter,
            contests: entry.lector.contests,
            certificates: entry.lector.certificates,
            careers: entry.lector.careers,
            created_at: entry.lector.created_at.as_datetime().to_rfc3339(),
            proof_urls: entry.proof_urls,
        }
    }
}

/// Center state returned after an approval.
#[derive(Debug, Clone, Serialize)]
pub struct CenterResponse {
    pub id: String,
    pub name: String,
    pub approved: bool,
    pub created_at: String,
}

impl From<Center> for CenterResponse {
    fn from(center: Center) -> Self {
        Self {
            id: center.id.to_string(),
            name: center.name,
            approved: center.approved,
            created_at: center.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Lector state returned after an approval.
#[derive(Debug, Clone, Serialize)]
pub struct LectorResponse {
    pub id: String,
    pub user_id: String,
    pub is_setter: bool,
    pub approved: bool,
    pub created_at: String,
}

impl From<Lector> for LectorResponse {
    fn from(lector: Lector) -> Self {
        Self {
            id: lector.id.to_string(),
            user_id: lector.user_id.to_string(),
            is_setter: lector.is_setter,
            approved: lector.approved,
            created_at: lector.created_at.as_datetime().to_rfc3339(),
        }
    }
}
