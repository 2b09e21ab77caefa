//! Raster decoding via the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::DecodeError;
use crate::buffer::ImageBuffer;

/// Load an image file into a buffer.
///
/// The format is detected from the file contents. Luma images become
/// grayscale buffers, everything else RGB.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if `path` does not exist,
/// `DecodeError::Io` if it cannot be read, and `DecodeError::Decode` if the
/// contents are not a supported image. Decode messages name the path.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, DecodeError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DecodeError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let buffer = decode_image(&bytes).map_err(|e| match e {
        DecodeError::Decode(message) => {
            DecodeError::Decode(format!("{}: {}", path.display(), message))
        }
        other => other,
    })?;

    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        buffer.width(),
        buffer.height(),
        buffer.layout()
    );
    Ok(buffer)
}

/// Decode an in-memory image file (PNG or JPEG).
///
/// # Errors
///
/// Returns `DecodeError::Decode` if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Decode(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Decode(e.to_string()))?;

    Ok(ImageBuffer::from_dynamic(img))
}
