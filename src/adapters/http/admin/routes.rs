//! Axum router for the admin approval endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    approve_center, approve_lector, list_unapproved_centers, list_unapproved_lectors,
    reject_center, reject_lector, AdminAppState,
};

/// Admin approval routes.
///
/// - `GET /centers/unapproved` - pending centers with proof documents
/// - `POST /centers/{id}/approve` / `POST /centers/{id}/reject`
/// - `GET /lectors/unapproved` - pending lectors with proof documents
/// - `POST /lectors/{id}/approve` / `POST /lectors/{id}/reject`
///
/// All routes require an admin principal; the role check runs in the
/// application handlers.
pub fn admin_routes() -> Router<AdminAppState> {
    Router::new()
        .route("/centers/unapproved", get(list_unapproved_centers))
        .route("/centers/:center_id/approve", post(approve_center))
        .route("/centers/:center_id/reject", post(reject_center))
        .route("/lectors/unapproved", get(list_unapproved_lectors))
        .route("/lectors/:lector_id/approve", post(approve_lector))
        .route("/lectors/:lector_id/reject", post(reject_lector))
}

/// Admin module router, suitable for nesting under `/api/v1/admin`.
pub fn admin_router() -> Router<AdminAppState> {
    Router::new().nest("/admin", admin_routes())
}
