//! Blob store trait for uploaded spreadsheet content.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for raw upload storage backends.
///
/// Paths are relative to the backend's root and use `/` separators.
/// The only implementation today is the local filesystem store in
/// `sheethub-storage`.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g. "local").
    fn provider_type(&self) -> &str;

    /// Check whether the backend is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to the given path, creating parent directories and
    /// replacing any existing blob.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a blob into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Delete the blob at the given path. Deleting a missing blob is not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a blob exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
