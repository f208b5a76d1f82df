//! Admin approval API.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CenterResponse, LectorResponse, UnapprovedCenterResponse, UnapprovedLectorResponse,
};
pub use handlers::AdminAppState;
pub use routes::{admin_router, admin_routes};
