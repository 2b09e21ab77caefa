//! PNG encoding. Lossless, so processed buffers reload unchanged.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;

use super::{color_type, validate_dimensions, EncodeError};
use crate::buffer::ImageBuffer;

/// Encode a buffer to PNG bytes (8-bit gray or RGB).
pub fn encode_png(buffer: &ImageBuffer) -> Result<Vec<u8>, EncodeError> {
    validate_dimensions(buffer)?;

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            buffer.pixels(),
            buffer.width(),
            buffer.height(),
            color_type(buffer),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(bytes)
}
