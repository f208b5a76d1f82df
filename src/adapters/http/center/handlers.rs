//! HTTP handlers for the center-owner endpoints.
//!
//! Ownership enforcement lives in the application handlers; this layer
//! extracts the principal and path parameters and shapes JSON.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequirePrincipal;
use crate::application::handlers::fee::{
    DeleteCenterFeeCommand, DeleteCenterFeeHandler, UpdateCenterFeesCommand,
    UpdateCenterFeesHandler,
};
use crate::application::handlers::reporting::{
    GetPostsSummaryHandler, GetPostsSummaryQuery, GetReviewsSummaryHandler, GetReviewsSummaryQuery,
    ListCenterPostsHandler, ListCenterPostsQuery, ListCenterReviewsHandler, ListCenterReviewsQuery,
};
use crate::application::handlers::review_answer::{
    CreateReviewAnswerCommand, CreateReviewAnswerHandler, DeleteReviewAnswerCommand,
    DeleteReviewAnswerHandler, UpdateReviewAnswerCommand, UpdateReviewAnswerHandler,
};
use crate::domain::foundation::{CenterId, FeeId, ReviewId};
use crate::ports::{CenterRepository, FeeRepository, PostReader, ReviewAnswerRepository, ReviewReader};

use super::dto::{
    AnswerRequest, AnswerResponse, FeeDetailResponse, FeeResponse, PageQuery, PaginatedResponse,
    PostResponse, ReviewResponse, UpdateFeesRequest,
};

/// Shared state for the center-owner endpoints.
#[derive(Clone)]
pub struct CenterAppState {
    pub centers: Arc<dyn CenterRepository>,
    pub fees: Arc<dyn FeeRepository>,
    pub posts: Arc<dyn PostReader>,
    pub reviews: Arc<dyn ReviewReader>,
    pub answers: Arc<dyn ReviewAnswerRepository>,
}

impl CenterAppState {
    fn update_fees_handler(&self) -> UpdateCenterFeesHandler {
        UpdateCenterFeesHandler::new(self.centers.clone(), self.fees.clone())
    }

    fn delete_fee_handler(&self) -> DeleteCenterFeeHandler {
        DeleteCenterFeeHandler::new(self.centers.clone(), self.fees.clone())
    }

    fn posts_summary_handler(&self) -> GetPostsSummaryHandler {
        GetPostsSummaryHandler::new(self.centers.clone(), self.posts.clone())
    }

    fn reviews_summary_handler(&self) -> GetReviewsSummaryHandler {
        GetReviewsSummaryHandler::new(self.centers.clone(), self.reviews.clone())
    }

    fn list_posts_handler(&self) -> ListCenterPostsHandler {
        ListCenterPostsHandler::new(self.centers.clone(), self.posts.clone())
    }

    fn list_reviews_handler(&self) -> ListCenterReviewsHandler {
        ListCenterReviewsHandler::new(self.centers.clone(), self.reviews.clone())
    }

    fn create_answer_handler(&self) -> CreateReviewAnswerHandler {
        CreateReviewAnswerHandler::new(
            self.centers.clone(),
            self.reviews.clone(),
            self.answers.clone(),
        )
    }

    fn update_answer_handler(&self) -> UpdateReviewAnswerHandler {
        UpdateReviewAnswerHandler::new(
            self.centers.clone(),
            self.reviews.clone(),
            self.answers.clone(),
        )
    }

    fn delete_answer_handler(&self) -> DeleteReviewAnswerHandler {
        DeleteReviewAnswerHandler::new(
            self.centers.clone(),
            self.reviews.clone(),
            self.answers.clone(),
        )
    }
}

/// PUT /api/v1/centers/{center_id}/fees - bulk replace-by-diff
pub async fn update_center_fees(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
    Json(request): Json<UpdateFeesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let desired_fees = request
        .fees
        .into_iter()
        .map(|fee| fee.into_fee(center_id))
        .collect();

    let detail = state
        .update_fees_handler()
        .handle(UpdateCenterFeesCommand {
            principal,
            center_id,
            desired_fees,
            fee_image_urls: request.fee_image_urls,
        })
        .await?;

    Ok(Json(FeeDetailResponse::from(detail)))
}

/// DELETE /api/v1/centers/{center_id}/fees/{fee_id} - soft delete
pub async fn delete_center_fee(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path((center_id, fee_id)): Path<(CenterId, FeeId)>,
) -> Result<impl IntoResponse, ApiError> {
    let fee = state
        .delete_fee_handler()
        .handle(DeleteCenterFeeCommand {
            principal,
            center_id,
            fee_id,
        })
        .await?;

    Ok(Json(FeeResponse::from(fee)))
}

/// GET /api/v1/centers/{center_id}/posts/summary
pub async fn get_posts_summary(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .posts_summary_handler()
        .handle(GetPostsSummaryQuery {
            principal,
            center_id,
        })
        .await?;

    Ok(Json(summary))
}

/// GET /api/v1/centers/{center_id}/reviews/summary
pub async fn get_reviews_summary(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .reviews_summary_handler()
        .handle(GetReviewsSummaryQuery {
            principal,
            center_id,
        })
        .await?;

    Ok(Json(summary))
}

/// GET /api/v1/centers/{center_id}/posts?page=&per_page=
pub async fn list_center_posts(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .list_posts_handler()
        .handle(ListCenterPostsQuery {
            principal,
            center_id,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok(Json(PaginatedResponse::from_paginated(
        page,
        PostResponse::from,
    )))
}

/// GET /api/v1/centers/{center_id}/reviews?page=&per_page=
pub async fn list_center_reviews(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(center_id): Path<CenterId>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .list_reviews_handler()
        .handle(ListCenterReviewsQuery {
            principal,
            center_id,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok(Json(PaginatedResponse::from_paginated(
        page,
        ReviewResponse::from,
    )))
}

/// POST /api/v1/centers/{center_id}/reviews/{review_id}/answer
pub async fn create_review_answer(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path((center_id, review_id)): Path<(CenterId, ReviewId)>,
    Json(request): Json<AnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let answer = state
        .create_answer_handler()
        .handle(CreateReviewAnswerCommand {
            principal,
            center_id,
            review_id,
            content: request.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AnswerResponse::from(answer))))
}

/// PUT /api/v1/centers/{center_id}/reviews/{review_id}/answer
pub async fn update_review_answer(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path((center_id, review_id)): Path<(CenterId, ReviewId)>,
    Json(request): Json<AnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let answer = state
        .update_answer_handler()
        .handle(UpdateReviewAnswerCommand {
            principal,
            center_id,
            review_id,
            content: request.content,
        })
        .await?;

    Ok(Json(AnswerResponse::from(answer)))
}

/// DELETE /api/v1/centers/{center_id}/reviews/{review_id}/answer
pub async fn delete_review_answer(
    State(state): State<CenterAppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path((center_id, review_id)): Path<(CenterId, ReviewId)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_answer_handler()
        .handle(DeleteReviewAnswerCommand {
            principal,
            center_id,
            review_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
