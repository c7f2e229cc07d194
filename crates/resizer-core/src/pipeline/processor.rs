//! Pipeline orchestration - fetch, transform, publish, report.

use aws_lambda_events::event::s3::S3Event;
use bytes::Bytes;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{PipelineError, Result, StorageError};
use crate::event::{file_references, FileReference};
use crate::storage::{ObjectMetadata, ObjectStore, PutAck};
use crate::types::{InvocationReport, PublishedImage};

use super::target::{result_url, TargetDescriptor, DESCRIPTION_METADATA_KEY};
use super::transform::{transform, TransformedImage};

/// Resizes every object named in an upload notification.
///
/// References are handled strictly one after another. The first error stops
/// the batch; outputs already written stay where they are.
pub struct ImageResizer {
    config: Config,
    store: Arc<dyn ObjectStore>,
}

impl ImageResizer {
    /// Create a resizer over an already validated configuration.
    pub fn new(config: Config, store: Arc<dyn ObjectStore>) -> Self {
        Self { config, store }
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every record of `event` in order.
    pub async fn process_event(&self, event: &S3Event) -> Result<InvocationReport> {
        tracing::info!("Starting picture resizer ...");
        tracing::debug!("Event: {:?}", event);

        let mut report = InvocationReport::default();
        if event.records.is_empty() {
            tracing::warn!("No records found in S3 event");
            return Ok(report);
        }

        for reference in file_references(event) {
            let reference = reference?;
            report.published.push(self.process_reference(&reference).await?);
        }

        tracing::info!("Resized {} image(s)", report.len());
        Ok(report)
    }

    /// Fetch, resize and publish a single object.
    pub async fn process_reference(&self, reference: &FileReference) -> Result<PublishedImage> {
        let start = std::time::Instant::now();
        tracing::info!("Loading file s3://{}/{}", reference.bucket, reference.key);

        let raw = self.fetch(&reference.bucket, &reference.key).await?;
        let fetch_time = start.elapsed();
        tracing::trace!("  Fetch: {:?} ({} bytes)", fetch_time, raw.len());

        let transform_start = std::time::Instant::now();
        let resized = self.transform(reference, raw).await?;
        tracing::trace!("  Transform: {:?}", transform_start.elapsed());

        let target = TargetDescriptor::for_source(reference, &self.config);
        let size_bytes = resized.bytes.len() as u64;
        let ack = self.publish(&target, Bytes::from(resized.bytes)).await?;

        let url = result_url(&self.config.region, &target.bucket, &target.key);
        tracing::info!(url = %url, "New image URL is {}", url);
        tracing::debug!(
            "Processed s3://{}/{} in {:?}",
            reference.bucket,
            reference.key,
            start.elapsed()
        );

        Ok(PublishedImage {
            source: reference.clone(),
            target_key: target.key,
            url,
            width: resized.width,
            height: resized.height,
            size_bytes,
            e_tag: ack.e_tag,
        })
    }

    /// Read the source object. Storage errors pass through unchanged.
    pub async fn fetch(&self, bucket: &str, key: &str) -> std::result::Result<Bytes, StorageError> {
        self.store.get(bucket, key).await
    }

    /// Run the CPU-bound transform on the blocking pool and wait for it.
    async fn transform(&self, reference: &FileReference, raw: Bytes) -> Result<TransformedImage> {
        let size = self.config.size.clone();
        let filter = self.config.filter;

        let joined = tokio::task::spawn_blocking(move || transform(&raw, &size, filter)).await;

        match joined {
            Ok(Ok(resized)) => Ok(resized),
            Ok(Err(source)) => Err(PipelineError::Transform {
                bucket: reference.bucket.clone(),
                key: reference.key.clone(),
                source,
            }
            .into()),
            Err(e) => Err(PipelineError::Worker {
                bucket: reference.bucket.clone(),
                key: reference.key.clone(),
                message: format!("Task join error: {}", e),
            }
            .into()),
        }
    }

    /// Upload `body` to the target with the description and JPEG content type.
    ///
    /// A failed upload is logged with bucket and key, then returned as-is.
    pub async fn publish(
        &self,
        target: &TargetDescriptor,
        body: Bytes,
    ) -> std::result::Result<PutAck, StorageError> {
        let metadata = ObjectMetadata::new(target.content_type)
            .with_entry(DESCRIPTION_METADATA_KEY, target.description.clone());

        tracing::info!(
            "Uploading new image to bucket {} with key {}...",
            target.bucket,
            target.key
        );
        match self
            .store
            .put(&target.bucket, &target.key, body, metadata)
            .await
        {
            Ok(ack) => Ok(ack),
            Err(e) => {
                tracing::error!(
                    bucket = %target.bucket,
                    key = %target.key,
                    error = %e,
                    "Unable to upload image to bucket {} with key {}",
                    target.bucket,
                    target.key
                );
                Err(e)
            }
        }
    }
}
