//! In-memory implementation of the BlobStorage port, for tests and
//! local development without a filesystem root.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::BlobStorage;

pub struct InMemoryBlobStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBlobStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn upload(
        &self,
        content: Vec<u8>,
        domain: &str,
        purpose: &str,
    ) -> Result<String, DomainError> {
        let url = format!("mem://{}/{}/{}", domain, purpose, Uuid::new_v4());
        self.objects.lock().unwrap().insert(url.clone(), content);
        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), DomainError> {
        self.objects
            .lock()
            .unwrap()
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::StorageError, "Object not found")
                    .with_detail("url", url)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_delete_round_trip() {
        let storage = InMemoryBlobStorage::new();

        let url = storage
            .upload(b"bytes".to_vec(), "center", "proof")
            .await
            .unwrap();
        assert_eq!(storage.len(), 1);

        storage.delete(&url).await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_url_fails() {
        let storage = InMemoryBlobStorage::new();
        let err = storage.delete("mem://center/proof/unknown").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
