//! Error types for the image resizer.
//!
//! Errors are organized by stage so a failed invocation names what broke and
//! for which object (bucket, key, record index, or offending setting).

use thiserror::Error;

/// Top-level error type for resizer operations.
#[derive(Error, Debug)]
pub enum ResizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The inbound notification is missing required fields
    #[error("Malformed event: {0}")]
    Event(#[from] EventError),

    /// Object store read/write failures, passed through untouched
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configured target size does not parse
    #[error("Invalid target size: {0}")]
    InvalidSize(#[from] SizeSpecError),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failures parsing a `<width>x<height>` size spec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeSpecError {
    #[error("{spec:?} must have the form <width>x<height>")]
    Format { spec: String },

    #[error("{spec:?} has a non-numeric dimension {value:?}")]
    InvalidDimension { spec: String, value: String },

    #[error("{spec:?} has a zero dimension")]
    ZeroDimension { spec: String },
}

/// Notification records that cannot be turned into a file reference.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("record {index} has no bucket name")]
    MissingBucket { index: usize },

    #[error("record {index} has no object key")]
    MissingKey { index: usize },

    #[error("record {index} has an object key that is not valid URL encoding: {key}")]
    InvalidKeyEncoding { index: usize, key: String },
}

/// Object store access errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("object not found: s3://{bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("access denied: s3://{bucket}/{key}")]
    AccessDenied { bucket: String, key: String },

    #[error("request for s3://{bucket}/{key} failed: {message}")]
    Request {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("failed to read body of s3://{bucket}/{key}: {message}")]
    Body {
        bucket: String,
        key: String,
        message: String,
    },
}

/// Failures inside the pure decode → resize → encode transform.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The bytes are not in the one format this resizer accepts
    #[error("Unsupported image file format, expected jpeg, got {format}")]
    UnsupportedFormat { format: String },

    /// Format was recognized but decoding failed
    #[error("decode failed: {0}")]
    Decode(String),

    /// Re-encoding the resized image failed
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Pipeline processing errors, carrying the object they happened on.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("transform failed for s3://{bucket}/{key}: {source}")]
    Transform {
        bucket: String,
        key: String,
        #[source]
        source: TransformError,
    },

    /// The blocking transform task panicked or was cancelled
    #[error("transform task for s3://{bucket}/{key} did not complete: {message}")]
    Worker {
        bucket: String,
        key: String,
        message: String,
    },
}

/// Convenience type alias for resizer results.
pub type Result<T> = std::result::Result<T, ResizerError>;
