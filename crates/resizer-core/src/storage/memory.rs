//! In-memory object store for tests and local dry runs.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ObjectMetadata, ObjectStore, PutAck};
use crate::error::StorageError;

type ObjectId = (String, String);

#[derive(Debug, Clone)]
struct StoredObject {
    body: Bytes,
    metadata: ObjectMetadata,
    version: u64,
}

/// A map of `(bucket, key)` to objects, with call counters and write denial.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<ObjectId, StoredObject>>,
    denied_writes: Mutex<HashSet<ObjectId>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
    next_version: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn id(bucket: &str, key: &str) -> ObjectId {
    (bucket.to_string(), key.to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object directly, bypassing counters.
    pub fn insert(&self, bucket: &str, key: &str, body: impl Into<Bytes>, metadata: ObjectMetadata) {
        self.store(bucket, key, body.into(), metadata);
    }

    fn store(&self, bucket: &str, key: &str, body: Bytes, metadata: ObjectMetadata) -> u64 {
        let version = self.next_version.fetch_add(1, Ordering::SeqCst) as u64;
        lock(&self.objects).insert(
            id(bucket, key),
            StoredObject {
                body,
                metadata,
                version,
            },
        );
        version
    }

    /// Make every later write to `bucket`/`key` fail with access denied.
    pub fn deny_writes(&self, bucket: &str, key: &str) {
        lock(&self.denied_writes).insert(id(bucket, key));
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        lock(&self.objects).contains_key(&id(bucket, key))
    }

    /// Body of a stored object, if present.
    pub fn body(&self, bucket: &str, key: &str) -> Option<Bytes> {
        lock(&self.objects)
            .get(&id(bucket, key))
            .map(|object| object.body.clone())
    }

    /// All keys stored in `bucket`, sorted.
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = lock(&self.objects)
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_calls(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        lock(&self.objects)
            .get(&id(bucket, key))
            .map(|object| object.body.clone())
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<PutAck, StorageError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if lock(&self.denied_writes).contains(&id(bucket, key)) {
            return Err(StorageError::AccessDenied {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }

        let version = self.store(bucket, key, body, metadata);

        Ok(PutAck {
            e_tag: Some(format!("\"{version:016x}\"")),
            version_id: Some(version.to_string()),
        })
    }

    async fn head_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, StorageError> {
        lock(&self.objects)
            .get(&id(bucket, key))
            .map(|object| object.metadata.clone())
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_and_head() {
        let store = MemoryStore::new();
        let metadata = ObjectMetadata::new("image/jpeg").with_entry("x-amz-meta-description", "d");

        let ack = store
            .put("b", "k.jpeg", Bytes::from_static(b"abc"), metadata.clone())
            .await
            .unwrap();
        assert!(ack.e_tag.is_some());

        assert_eq!(store.get("b", "k.jpeg").await.unwrap().as_ref(), b"abc");
        assert_eq!(store.head_metadata("b", "k.jpeg").await.unwrap(), metadata);
        assert_eq!(store.get_calls(), 1);
        assert_eq!(store.put_calls(), 1);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.insert("b", "k", Bytes::from_static(b"old"), ObjectMetadata::default());
        let first = store
            .put("b", "k", Bytes::from_static(b"new"), ObjectMetadata::default())
            .await
            .unwrap();
        let second = store
            .put("b", "k", Bytes::from_static(b"newer"), ObjectMetadata::default())
            .await
            .unwrap();

        assert_ne!(first.version_id, second.version_id);
        assert_eq!(store.body("b", "k").unwrap().as_ref(), b"newer");
        assert_eq!(store.keys("b"), vec!["k".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_object() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get("b", "nope").await,
            Err(StorageError::NotFound { .. })
        ));
        assert!(matches!(
            store.head_metadata("b", "nope").await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_denied_write() {
        let store = MemoryStore::new();
        store.deny_writes("b", "k");
        let err = store
            .put("b", "k", Bytes::from_static(b"x"), ObjectMetadata::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::AccessDenied { .. }));
        assert!(!store.contains("b", "k"));
    }
}
