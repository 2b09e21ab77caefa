//! JPEG encoding.
//!
//! Lossy, so a saved JPEG does not reproduce the buffer exactly; use PNG
//! when the processed samples must survive a reload.

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use super::{color_type, validate_dimensions, EncodeError};
use crate::buffer::ImageBuffer;

/// Quality used when the caller does not choose one.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode a buffer to JPEG bytes.
///
/// `quality` is clamped to 1-100. Grayscale buffers are written as
/// single-channel JPEGs.
pub fn encode_jpeg(buffer: &ImageBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate_dimensions(buffer)?;

    let quality = quality.clamp(1, 100);
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(
            buffer.pixels(),
            buffer.width(),
            buffer.height(),
            color_type(buffer),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(bytes)
}
