//! Error types for image persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while encoding or saving a buffer.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The target path's extension is not a supported output format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The encoder rejected the data.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoded bytes could not be written.
    #[error("I/O error writing {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}
