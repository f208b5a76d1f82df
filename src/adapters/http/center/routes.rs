//! Axum router for the center-owner endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_review_answer, delete_center_fee, delete_review_answer, get_posts_summary,
    get_reviews_summary, list_center_posts, list_center_reviews, update_center_fees,
    update_review_answer, CenterAppState,
};

/// Center-owner routes, all guarded by resource ownership.
///
/// - `PUT /{center_id}/fees` - bulk fee replace-by-diff
/// - `DELETE /{center_id}/fees/{fee_id}` - fee soft delete
/// - `GET /{center_id}/posts/summary`, `GET /{center_id}/reviews/summary`
/// - `GET /{center_id}/posts`, `GET /{center_id}/reviews` (paginated)
/// - `POST`/`PUT`/`DELETE /{center_id}/reviews/{review_id}/answer`
pub fn center_routes() -> Router<CenterAppState> {
    Router::new()
        .route("/:center_id/fees", put(update_center_fees))
        .route("/:center_id/fees/:fee_id", delete(delete_center_fee))
        .route("/:center_id/posts/summary", get(get_posts_summary))
        .route("/:center_id/reviews/summary", get(get_reviews_summary))
        .route("/:center_id/posts", get(list_center_posts))
        .route("/:center_id/reviews", get(list_center_reviews))
        .route(
            "/:center_id/reviews/:review_id/answer",
            post(create_review_answer)
                .put(update_review_answer)
                .delete(delete_review_answer),
        )
}

/// Center module router, suitable for nesting under `/api/v1/centers`.
pub fn center_router() -> Router<CenterAppState> {
    Router::new().nest("/centers", center_routes())
}
