//! Image decoding with content-based format detection and the JPEG gate.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::error::TransformError;

/// The only encoding accepted on input and produced on output.
pub const SUPPORTED_FORMAT: ImageFormat = ImageFormat::Jpeg;

/// Canonical MIME type of [`SUPPORTED_FORMAT`].
pub const CONTENT_TYPE: &str = "image/jpeg";

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format (always [`SUPPORTED_FORMAT`])
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decode `bytes`, refusing anything that is not a JPEG.
///
/// The format is sniffed from the leading bytes before any pixel data is
/// decoded, so a PNG (or garbage) is rejected without being decoded.
pub fn decode_jpeg(bytes: &[u8]) -> Result<DecodedImage, TransformError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("Cannot detect image format: {}", e)))?;

    let format = match reader.format() {
        Some(f) if f == SUPPORTED_FORMAT => f,
        Some(other) => {
            tracing::error!("File format is {}", format_name(other));
            return Err(TransformError::UnsupportedFormat {
                format: format_name(other),
            });
        }
        None => {
            tracing::error!("File format could not be detected");
            return Err(TransformError::UnsupportedFormat {
                format: "unknown".to_string(),
            });
        }
    };

    let image = reader
        .decode()
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    let (width, height) = image.dimensions();
    Ok(DecodedImage {
        image,
        format,
        width,
        height,
    })
}

/// Lowercase name of a detected format, as reported in rejections.
pub fn format_name(format: ImageFormat) -> String {
    format!("{format:?}").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_name(ImageFormat::Png), "png");
        assert_eq!(format_name(ImageFormat::WebP), "webp");
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = encode(&DynamicImage::new_rgb8(64, 48), ImageFormat::Jpeg);
        let decoded = decode_jpeg(&bytes).unwrap();
        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!((decoded.width, decoded.height), (64, 48));
    }

    #[test]
    fn test_png_is_rejected_by_content() {
        let bytes = encode(&DynamicImage::new_rgb8(8, 8), ImageFormat::Png);
        match decode_jpeg(&bytes) {
            Err(TransformError::UnsupportedFormat { format }) => assert_eq!(format, "png"),
            other => panic!("expected UnsupportedFormat, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = decode_jpeg(b"definitely not an image").err().unwrap();
        assert!(matches!(err, TransformError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_truncated_jpeg_fails_to_decode() {
        let bytes = encode(&DynamicImage::new_rgb8(32, 32), ImageFormat::Jpeg);
        let err = decode_jpeg(&bytes[..16]).err().unwrap();
        assert!(matches!(err, TransformError::Decode(_)));
    }
}
