//! HTTP adapters - REST API surface.
//!
//! Each workflow area has its own module with dto/handlers/routes; the
//! shared pieces are the error mapping and the bearer-token middleware.

pub mod admin;
pub mod center;
pub mod error;
pub mod middleware;

pub use admin::{admin_router, AdminAppState};
pub use center::{center_router, CenterAppState};
pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthState, RequirePrincipal};
