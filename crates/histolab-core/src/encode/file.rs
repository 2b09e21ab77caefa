//! Saving buffers to disk.

use std::path::Path;

use image::ImageFormat;

use super::{encode_jpeg, encode_png, EncodeError, DEFAULT_JPEG_QUALITY};
use crate::buffer::ImageBuffer;

/// Write a buffer to `path`, choosing the format from its extension.
///
/// `.png` writes a lossless PNG; `.jpg` / `.jpeg` write a JPEG at
/// [`DEFAULT_JPEG_QUALITY`].
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedFormat` for any other extension and
/// `EncodeError::Io` if the file cannot be written.
pub fn save_image<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> Result<(), EncodeError> {
    let path = path.as_ref();

    let bytes = match output_format(path)? {
        ImageFormat::Png => encode_png(buffer)?,
        ImageFormat::Jpeg => encode_jpeg(buffer, DEFAULT_JPEG_QUALITY)?,
        other => return Err(EncodeError::UnsupportedFormat(format!("{:?}", other))),
    };

    std::fs::write(path, &bytes).map_err(|e| EncodeError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn output_format(path: &Path) -> Result<ImageFormat, EncodeError> {
    ImageFormat::from_path(path).map_err(|_| {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("<none>")
            .to_string();
        EncodeError::UnsupportedFormat(extension)
    })
}
