//! Object storage behind a narrow async interface.
//!
//! The pipeline only ever talks to [`ObjectStore`]; [`S3Store`] is the
//! production backend and [`MemoryStore`] stands in for it in tests.

pub mod memory;
pub mod s3;

pub use memory::MemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StorageError;

/// Content type plus user metadata of a stored object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub content_type: Option<String>,
    /// User metadata entries
    pub user: BTreeMap<String, String>,
}

impl ObjectMetadata {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            user: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user.insert(key.into(), value.into());
        self
    }
}

/// Acknowledgment returned by a successful write. Not interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutAck {
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
}

/// Read/write access to a bucketed object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read a whole object into memory.
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;

    /// Write `body`, replacing any existing object at `bucket`/`key`.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<PutAck, StorageError>;

    /// Fetch content type and user metadata without the body.
    async fn head_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, StorageError>;
}
