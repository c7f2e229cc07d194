//! Image resizing pipeline components.
//!
//! This module contains the stages run for every file reference:
//! - **decode**: Detect the format from content and decode JPEGs only
//! - **transform**: Resize to the exact target size and re-encode as JPEG
//! - **target**: Derive the output key, metadata and result URL
//! - **processor**: Orchestrates fetch → transform → publish → report

pub mod decode;
pub mod processor;
pub mod target;
pub mod transform;

// Re-exports for convenient access
pub use decode::{decode_jpeg, DecodedImage, CONTENT_TYPE, SUPPORTED_FORMAT};
pub use processor::ImageResizer;
pub use target::{derive_key, result_url, split_extension, TargetDescriptor, DESCRIPTION_METADATA_KEY};
pub use transform::{transform, TransformedImage};
