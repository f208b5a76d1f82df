//! HTTP DTOs for the center-owner endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::fee::FeeDetail;
use crate::domain::center::{CenterFee, PeriodType, ReviewAnswer};
use crate::domain::foundation::{CenterId, FeeId, Paginated};
use crate::ports::{PostView, ReviewView};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One fee in a bulk update request.
///
/// A missing `id` means a new fee; a present one replaces the persisted
/// row with that id.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeRequest {
    #[serde(default)]
    pub id: Option<FeeId>,
    pub name: String,
    pub price: i64,
    pub count: i32,
    pub period: i32,
    pub period_type: PeriodType,
}

impl FeeRequest {
    /// Builds the domain fee for the given center.
    pub fn into_fee(self, center_id: CenterId) -> CenterFee {
        CenterFee {
            id: self.id.unwrap_or_else(FeeId::new),
            center_id,
            name: self.name,
            price: self.price,
            count: self.count,
            period: self.period,
            period_type: self.period_type,
            is_deleted: false,
        }
    }
}

/// Bulk fee update: the complete desired fee set plus the fee page images.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFeesRequest {
    pub fees: Vec<FeeRequest>,
    #[serde(default)]
    pub fee_image_urls: Vec<String>,
}

/// Body for creating or updating a review answer.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub content: String,
}

/// Pagination query parameters. Pages are zero-based.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    20
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One fee row.
#[derive(Debug, Clone, Serialize)]
pub struct FeeResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub count: i32,
    pub period: i32,
    pub period_type: PeriodType,
    pub is_deleted: bool,
}

impl From<CenterFee> for FeeResponse {
    fn from(fee: CenterFee) -> Self {
        Self {
            id: fee.id.to_string(),
            name: fee.name,
            price: fee.price,
            count: fee.count,
            period: fee.period,
            period_type: fee.period_type,
            is_deleted: fee.is_deleted,
        }
    }
}

/// Fee detail view: the reconciled fee set and the fee page images.
#[derive(Debug, Clone, Serialize)]
pub struct FeeDetailResponse {
    pub fees: Vec<FeeResponse>,
    pub fee_image_urls: Vec<String>,
}

impl From<FeeDetail> for FeeDetailResponse {
    fn from(detail: FeeDetail) -> Self {
        Self {
            fees: detail.fees.into_iter().map(FeeResponse::from).collect(),
            fee_image_urls: detail.fee_image_urls,
        }
    }
}

/// Review answer view.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub id: String,
    pub review_id: String,
    pub content: String,
    pub created_at: String,
}

impl From<ReviewAnswer> for AnswerResponse {
    fn from(answer: ReviewAnswer) -> Self {
        Self {
            id: answer.id.to_string(),
            review_id: answer.review_id.to_string(),
            content: answer.content,
            created_at: answer.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// One post in the paginated listing.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_urls: Vec<String>,
    pub created_at: String,
}

impl From<PostView> for PostResponse {
    fn from(post: PostView) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            image_urls: post.image_urls,
            created_at: post.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// One review in the paginated listing.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub author_user_id: String,
    pub content: String,
    pub tags: Vec<String>,
    pub answer: Option<String>,
    pub created_at: String,
}

impl From<ReviewView> for ReviewResponse {
    fn from(review: ReviewView) -> Self {
        Self {
            id: review.id.to_string(),
            author_user_id: review.author_user_id.to_string(),
            content: review.content,
            tags: review.tags,
            answer: review.answer,
            created_at: review.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Paginated envelope with `-1` edge sentinels.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub next_page_num: i64,
    pub previous_page_num: i64,
    pub total_num: u64,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Maps a domain page into the response envelope.
    pub fn from_paginated<U, F>(page: Paginated<U>, map: F) -> Self
    where
        F: FnMut(U) -> T,
    {
        Self {
            next_page_num: page.next_page_num,
            previous_page_num: page.previous_page_num,
            total_num: page.total_num,
            results: page.results.into_iter().map(map).collect(),
        }
    }
}
