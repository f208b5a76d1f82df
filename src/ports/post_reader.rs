//! Post reader port (read side / CQRS queries).
//!
//! Posts are immutable content rows; this layer only ever reads them,
//! either as raw creation timestamps for the summary arithmetic or as
//! paginated views for the list endpoint.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{CenterId, DomainError, Page, PostId, Timestamp};

/// Reader port for center posts.
#[async_trait]
pub trait PostReader: Send + Sync {
    /// Creation timestamps of every post for a center.
    ///
    /// Raw input to the time-bucket summary; unordered.
    async fn created_timestamps_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<Timestamp>, DomainError>;

    /// One page of posts for a center, newest first.
    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<PostView>, DomainError>;
}

/// Read-optimized view of one post.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
}
