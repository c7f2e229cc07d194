//! Decode → resize → re-encode, all in memory.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::config::ResizeFilter;
use crate::error::TransformError;
use crate::size::SizeSpec;

use super::decode::decode_jpeg;

/// A resized JPEG ready for upload.
#[derive(Debug, Clone)]
pub struct TransformedImage {
    /// Encoded JPEG bytes, starting at the SOI marker
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Dimensions of the source image
    pub source_width: u32,
    pub source_height: u32,
}

/// Resize a JPEG to exactly `size`, ignoring the source aspect ratio.
///
/// Non-JPEG input fails before any resampling happens.
pub fn transform(
    raw: &[u8],
    size: &SizeSpec,
    filter: ResizeFilter,
) -> Result<TransformedImage, TransformError> {
    tracing::info!("Resizing image with new size {}...", size);

    let decoded = decode_jpeg(raw)?;
    let resized = decoded
        .image
        .resize_exact(size.width(), size.height(), filter.into());
    let bytes = encode_jpeg(&resized)?;

    tracing::debug!(
        "Resized {}x{} -> {}x{} ({} bytes, {})",
        decoded.width,
        decoded.height,
        resized.width(),
        resized.height(),
        bytes.len(),
        filter.as_str()
    );

    Ok(TransformedImage {
        bytes,
        width: resized.width(),
        height: resized.height(),
        source_width: decoded.width,
        source_height: decoded.height,
    })
}

/// Encode as baseline JPEG. Alpha and 16-bit channels are flattened to RGB8.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, TransformError> {
    let mut buffer = Vec::new();
    image
        .to_rgb8()
        .write_with_encoder(JpegEncoder::new(&mut buffer))
        .map_err(|e| TransformError::Encode(e.to_string()))?;
    Ok(buffer)
}
