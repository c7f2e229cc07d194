//! File references extracted from S3 upload notifications.

use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// One stored object named by a notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub bucket: String,
    pub key: String,
}

impl FileReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Read bucket and key from `s3.bucket.name` / `s3.object.key`.
    ///
    /// S3 URL-encodes keys in notifications (spaces arrive as `+`), so the
    /// key is decoded back to the name the object is actually stored under.
    pub fn from_record(index: usize, record: &S3EventRecord) -> Result<Self, EventError> {
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or(EventError::MissingBucket { index })?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or(EventError::MissingKey { index })?;

        Ok(Self::new(bucket, decode_key(index, raw_key)?))
    }
}

fn decode_key(index: usize, raw: &str) -> Result<String, EventError> {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|key| key.into_owned())
        .map_err(|_| EventError::InvalidKeyEncoding {
            index,
            key: raw.to_string(),
        })
}

/// Lazily yield one file reference per record, in record order.
///
/// A malformed record yields an error in its position; callers stop there.
pub fn file_references(
    event: &S3Event,
) -> impl Iterator<Item = Result<FileReference, EventError>> + '_ {
    event
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| FileReference::from_record(index, record))
}
