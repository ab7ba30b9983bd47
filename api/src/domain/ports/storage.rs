//! Object storage port trait

use async_trait::async_trait;
use serde::Serialize;

use crate::config::StorageProvider;
use crate::error::StorageError;

/// Where an uploaded object ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObject {
    /// Public URL
    pub url: String,
    /// Object key inside the bucket
    pub path: String,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload bytes under `path`, never overwriting an existing object
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError>;

    /// Delete the object at `path`
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Which backend this is
    fn provider(&self) -> StorageProvider;
}
