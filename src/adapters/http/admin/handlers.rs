//! HTTP handlers for the admin approval endpoints.
//!
//! These connect axum routes to the approval command/query handlers. Role
//! enforcement lives in the application layer; this layer only extracts
//! the principal and translates between JSON and commands.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequirePrincipal;
use crate::application::handlers::approval::{
    ApproveCenterCommand, ApproveCenterHandler, ApproveLectorCommand, ApproveLectorHandler,
    ListUnapprovedCentersHandler, ListUnapprovedCentersQuery, ListUnapprovedLectorsHandler,
    ListUnapprovedLectorsQuery, RejectCenterCommand, RejectCenterHandler, RejectLectorCommand,
    RejectLectorHandler,
};
use crate::domain::foundation::{CenterId, LectorId};
use crate::ports::{
    ApprovedFileRepository, BlobStorage, CenterRepository, LectorRepository, UserRepository,
};

use super::dto::{
    CenterResponse, LectorResponse, UnapprovedCenterResponse, UnapprovedLectorResponse,
};

/// Shared state for the admin endpoints; Arc-wrapped ports, cloned per
/// request.
#[derive(Clone)]
pub struct AdminAppState {
    pub centers: Arc<dyn CenterRepository>,
    pub lectors: Arc<dyn LectorRepository>,
    pub users: Arc<dyn UserRepository>,
    pub approved_files: Arc<dyn ApprovedFileRepository>,
    pub blob_storage: Arc<dyn BlobStorage>,
}

impl AdminAppState {
    fn approve_center_handler(&self) -> ApproveCenterHandler {
        ApproveCenterHandler::new(
            self.centers.clone(),
            self.users.clone(),
            self.approved_files.clone(),
            self.blob_storage.clone(),
        )
    }

    fn reject_center_handler(&self) -> RejectCenterHandler {
        RejectCenterHandler::new(
            self.centers.clone(),
            self.approved_files.clone(),
            self.blob_storage.clone(),
        )
    }

    fn approve_lector_handler(&self) -> ApproveLectorHandler {
        ApproveLectorHandler::new(
            self.lectors.clone(),
            self.users.clone(),
            self.approved_files.clone(),
            self.blob_storage.clone(),
        )
    }

    fn reject_lector_handler(&self) -> RejectLectorHandler {
        RejectLectorHandler::new(
            self.lectors.clone(),
            self.approved_files.clone(),
            self.blob_storage.clone(),
        )
    }

    fn list_unapproved_centers_handler(&self) -> ListUnapprovedCentersHandler {
        ListUnapprovedCentersHandler::new(self.centers.clone(), self.approved_files.clone())
    }

    fn list_unapproved_lectors_handler(&self) -> ListUnapprovedLectorsHandler {
        ListUnapprovedLectorsHandler::new(self.lectors.clone(), self.approved_files.clone())
    }
}

/// GET /api/v1/admin/centers/unapproved
pub async fn list_unapproved_centers(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .list_unapproved_centers_handler()
        .handle(ListUnapprovedCentersQuery { principal })
        .await?;

    let response: Vec<UnapprovedCenterResponse> = entries
        .into_iter()
        .map(UnapprovedCenterResponse::from)
        .collect();
    Ok(Json(response))
}

/// POST /api/v1/admin/centers/{center_id}/approve
pub async fn approve_center(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
) -> Result<impl IntoResponse, ApiError> {
    let center = state
        .approve_center_handler()
        .handle(ApproveCenterCommand {
            principal,
            center_id,
        })
        .await?;

    Ok(Json(CenterResponse::from(center)))
}

/// POST /api/v1/admin/centers/{center_id}/reject
pub async fn reject_center(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reject_center_handler()
        .handle(RejectCenterCommand {
            principal,
            center_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/lectors/unapproved
pub async fn list_unapproved_lectors(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .list_unapproved_lectors_handler()
        .handle(ListUnapprovedLectorsQuery { principal })
        .await?;

    let response: Vec<UnapprovedLectorResponse> = entries
        .into_iter()
        .map(UnapprovedLectorResponse::from)
        .collect();
    Ok(Json(response))
}

/// POST /api/v1/admin/lectors/{lector_id}/approve
pub async fn approve_lector(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(lector_id): Path<LectorId>,
) -> Result<impl IntoResponse, ApiError> {
    let lector = state
        .approve_lector_handler()
        .handle(ApproveLectorCommand {
            principal,
            lector_id,
        })
        .await?;

    Ok(Json(LectorResponse::from(lector)))
}

/// POST /api/v1/admin/lectors/{lector_id}/reject
pub async fn reject_lector(
    State(state): State<AdminAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(lector_id): Path<LectorId>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reject_lector_handler()
        .handle(RejectLectorCommand {
            principal,
            lector_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
