//! Amazon S3 backend.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use std::collections::HashMap;

use super::{ObjectMetadata, ObjectStore, PutAck};
use crate::error::StorageError;

/// [`ObjectStore`] backed by an `aws_sdk_s3::Client`.
///
/// The client is cheap to clone and carries its own retry and timeout
/// settings; nothing here adds to them.
#[derive(Clone, Debug)]
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

/// Map an SDK failure onto the storage taxonomy by its error code.
fn classify<E, R>(err: &SdkError<E, R>, bucket: &str, key: &str) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.as_service_error().and_then(|e| e.code());
    match code {
        Some("NoSuchKey" | "NotFound") => StorageError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        Some("AccessDenied" | "Forbidden") => StorageError::AccessDenied {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        _ => StorageError::Request {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: DisplayErrorContext(err).to_string(),
        },
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(GetObjectError::is_no_such_key)
                {
                    StorageError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    classify(&err, bucket, key)
                }
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Body {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(body.into_bytes())
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        metadata: ObjectMetadata,
    ) -> Result<PutAck, StorageError> {
        let user: HashMap<String, String> = metadata.user.into_iter().collect();

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(metadata.content_type)
            .set_metadata(Some(user))
            .send()
            .await
            .map_err(|err| classify(&err, bucket, key))?;

        Ok(PutAck {
            e_tag: output.e_tag().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
        })
    }

    async fn head_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, StorageError> {
        let output = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(HeadObjectError::is_not_found)
                {
                    StorageError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    classify(&err, bucket, key)
                }
            })?;

        Ok(ObjectMetadata {
            content_type: output.content_type().map(str::to_string),
            user: output
                .metadata()
                .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default(),
        })
    }
}
