pub mod s3;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object store error: {0}")]
    Backend(String),
}

/// Object-store seam. Keys are opaque path-like strings, ttl in
/// seconds. `head` answers existence only; any store fault that is not
/// a clean not-found comes back as an error so callers can tell a
/// broken backend apart from a missing object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn head(&self, key: &str) -> Result<bool, StorageError>;

    async fn presign_get(&self, key: &str, ttl_secs: u64) -> Result<String, StorageError>;

    async fn presign_put(
        &self,
        key: &str,
        ttl_secs: u64,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
