//! Resizer Core - S3 upload notification → resized JPEG copy.
//!
//! For every object named in an S3 `ObjectCreated` notification the resizer
//! reads the image, checks that it is a JPEG, resizes it to the configured
//! size and writes the copy back to the same bucket with a description
//! attached.
//!
//! # Architecture
//!
//! ```text
//! S3Event → FileReference* → Fetch → Decode/Validate → Resize → Encode → Publish → URL
//! ```
//!
//! Storage sits behind the [`ObjectStore`] trait so the pipeline can run
//! against [`MemoryStore`] in tests and [`S3Store`] in production.
//!
//! # Usage
//!
//! ```rust,ignore
//! use resizer_core::{Config, ImageResizer, S3Store};
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let store = Arc::new(S3Store::new(aws_sdk_s3::Client::new(&sdk_config)));
//! let resizer = ImageResizer::new(config, store);
//! let report = resizer.process_event(&event).await?;
//! for url in report.urls() {
//!     println!("{url}");
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod size;
pub mod storage;
pub mod types;

// Re-exports for convenient access
pub use config::{Config, ResizeFilter};
pub use error::{
    ConfigError, EventError, PipelineError, ResizerError, Result, SizeSpecError, StorageError,
    TransformError,
};
pub use event::{file_references, FileReference};
pub use pipeline::{ImageResizer, TargetDescriptor};
pub use size::SizeSpec;
pub use storage::{MemoryStore, ObjectMetadata, ObjectStore, PutAck, S3Store};
pub use types::{InvocationReport, PublishedImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
