//! Blob storage adapters.

mod in_memory;
mod local_blob_storage;

pub use in_memory::InMemoryBlobStorage;
pub use local_blob_storage::LocalBlobStorage;
