//! Filesystem implementation of the BlobStorage port.
//!
//! Objects land under `{root}/{domain}/{purpose}/{uuid}` and are served
//! back under `{base_url}` with the same relative key. Only URLs this
//! adapter minted can be deleted; anything else is rejected before it
//! can escape the root directory.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::BlobStorage;

pub struct LocalBlobStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalBlobStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves a previously minted URL back to its path under the root.
    fn path_for_url(&self, url: &str) -> Result<PathBuf, DomainError> {
        let key = url
            .strip_prefix(&self.base_url)
            .map(|rest| rest.trim_start_matches('/'))
            .filter(|key| !key.is_empty() && !key.contains(".."))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::StorageError, "URL not owned by this storage")
                    .with_detail("url", url)
            })?;

        Ok(self.root.join(key))
    }
}

fn storage_err(context: &str, e: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("{}: {}", context, e))
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    async fn upload(
        &self,
        content: Vec<u8>,
        domain: &str,
        purpose: &str,
    ) -> Result<String, DomainError> {
        let key = format!("{}/{}/{}", domain, purpose, Uuid::new_v4());
        let path = self.root.join(&key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_err("Failed to create storage directory", e))?;
        }

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| storage_err("Failed to write object", e))?;

        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn delete(&self, url: &str) -> Result<(), DomainError> {
        let path = self.path_for_url(url)?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| storage_err("Failed to delete object", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &tempfile::TempDir) -> LocalBlobStorage {
        LocalBlobStorage::new(dir.path(), "https://files.example.com")
    }

    #[tokio::test]
    async fn upload_writes_object_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let url = storage
            .upload(b"proof document".to_vec(), "center", "proof")
            .await
            .unwrap();

        assert!(url.starts_with("https://files.example.com/center/proof/"));

        let path = storage.path_for_url(&url).unwrap();
        let content = tokio::fs::read(&path).await.unwrap();
        assert_eq!(content, b"proof document");
    }

    #[tokio::test]
    async fn delete_removes_uploaded_object() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let url = storage
            .upload(b"bytes".to_vec(), "center", "proof")
            .await
            .unwrap();
        storage.delete(&url).await.unwrap();

        let path = storage.path_for_url(&url).unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn delete_of_missing_object_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let err = storage
            .delete("https://files.example.com/center/proof/missing")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn delete_rejects_foreign_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let err = storage
            .delete("https://elsewhere.example.com/center/proof/abc")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn delete_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        let err = storage
            .delete("https://files.example.com/../../etc/passwd")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
