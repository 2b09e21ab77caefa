//! Image persistence.
//!
//! This module provides functionality for:
//! - Encoding buffers to PNG (lossless) and JPEG (configurable quality)
//! - Saving buffers to disk with the format inferred from the extension
//!
//! # Examples
//!
//! ```ignore
//! use histolab_core::encode::save_image;
//!
//! save_image(&processed, "equalized.png")?;
//! ```

mod file;
mod jpeg;
mod png;
mod types;

pub use file::save_image;
pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;
pub use types::EncodeError;

use image::ExtendedColorType;

use crate::buffer::{ChannelLayout, ImageBuffer};

fn validate_dimensions(buffer: &ImageBuffer) -> Result<(), EncodeError> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    Ok(())
}

fn color_type(buffer: &ImageBuffer) -> ExtendedColorType {
    match buffer.layout() {
        ChannelLayout::Gray => ExtendedColorType::L8,
        ChannelLayout::Rgb => ExtendedColorType::Rgb8,
    }
}
