//! Center-owner API: fees, reporting, review answers.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, AnswerResponse, FeeDetailResponse, FeeRequest, FeeResponse, PageQuery,
    PaginatedResponse, PostResponse, ReviewResponse, UpdateFeesRequest,
};
pub use handlers::CenterAppState;
pub use routes::{center_router, center_routes};
