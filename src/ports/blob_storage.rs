//! Blob storage port for uploaded documents and images.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Storage port for binary objects addressed by URL.
///
/// Failures surface as `StorageError`-coded `DomainError`s and are not
/// retried by this layer. Proof-file cleanup after an approval decision
/// treats delete failures as best-effort (logged, not re-raised).
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store an object and return its URL.
    ///
    /// `domain` and `purpose` name the owning area (e.g. "center",
    /// "proof") and become part of the object key.
    async fn upload(
        &self,
        content: Vec<u8>,
        domain: &str,
        purpose: &str,
    ) -> Result<String, DomainError>;

    /// Delete the object behind a previously returned URL.
    async fn delete(&self, url: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn BlobStorage) {}
    }
}
