//! Mock readers for the reporting handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{CenterId, DomainError, Page, PostId, ReviewId, Timestamp, UserId};
use crate::domain::reporting::ReviewRecord;
use crate::ports::{PostReader, PostView, ReviewHead, ReviewReader, ReviewView};

pub struct MockPostReader {
    pub timestamps: Mutex<Vec<(CenterId, Timestamp)>>,
    pub posts: Mutex<Vec<(CenterId, PostView)>>,
}

impl MockPostReader {
    pub fn new() -> Self {
        Self {
            timestamps: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_timestamps(center_id: CenterId, timestamps: Vec<Timestamp>) -> Self {
        let reader = Self::new();
        *reader.timestamps.lock().unwrap() =
            timestamps.into_iter().map(|t| (center_id, t)).collect();
        reader
    }

    pub fn push_post(&self, center_id: CenterId, title: &str, created_at: Timestamp) {
        self.posts.lock().unwrap().push((
            center_id,
            PostView {
                id: PostId::new(),
                title: title.to_string(),
                content: String::new(),
                image_urls: Vec::new(),
                created_at,
            },
        ));
    }
}

#[async_trait]
impl PostReader for MockPostReader {
    async fn created_timestamps_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<Timestamp>, DomainError> {
        Ok(self
            .timestamps
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == center_id)
            .map(|(_, t)| *t)
            .collect())
    }

    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<PostView>, DomainError> {
        let all: Vec<PostView> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == center_id)
            .map(|(_, p)| p.clone())
            .collect();
        let total_items = all.len() as u64;
        let items = all
            .into_iter()
            .skip((page_number * page_size) as usize)
            .take(page_size as usize)
            .collect();
        Ok(Page {
            items,
            page_number,
            page_size,
            total_items,
        })
    }
}

pub struct MockReviewReader {
    pub records: Mutex<Vec<(CenterId, ReviewRecord)>>,
    pub heads: Mutex<Vec<ReviewHead>>,
    pub reviews: Mutex<Vec<(CenterId, ReviewView)>>,
}

impl MockReviewReader {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            heads: Mutex::new(Vec::new()),
            reviews: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(center_id: CenterId, records: Vec<ReviewRecord>) -> Self {
        let reader = Self::new();
        *reader.records.lock().unwrap() = records.into_iter().map(|r| (center_id, r)).collect();
        reader
    }

    pub fn with_head(head: ReviewHead) -> Self {
        let reader = Self::new();
        reader.heads.lock().unwrap().push(head);
        reader
    }

    pub fn push_review(&self, center_id: CenterId, content: &str) {
        self.reviews.lock().unwrap().push((
            center_id,
            ReviewView {
                id: ReviewId::new(),
                author_user_id: UserId::new(),
                content: content.to_string(),
                tags: Vec::new(),
                answer: None,
                created_at: Timestamp::now(),
            },
        ));
    }
}

#[async_trait]
impl ReviewReader for MockReviewReader {
    async fn records_by_center(
        &self,
        center_id: &CenterId,
    ) -> Result<Vec<ReviewRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == center_id)
            .map(|(_, r)| r.clone())
            .collect())
    }

    async fn find_head(&self, review_id: &ReviewId) -> Result<Option<ReviewHead>, DomainError> {
        Ok(self
            .heads
            .lock()
            .unwrap()
            .iter()
            .find(|h| &h.id == review_id)
            .cloned())
    }

    async fn list_by_center(
        &self,
        center_id: &CenterId,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<ReviewView>, DomainError> {
        let all: Vec<ReviewView> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == center_id)
            .map(|(_, r)| r.clone())
            .collect();
        let total_items = all.len() as u64;
        let items = all
            .into_iter()
            .skip((page_number * page_size) as usize)
            .take(page_size as usize)
            .collect();
        Ok(Page {
            items,
            page_number,
            page_size,
            total_items,
        })
    }
}
