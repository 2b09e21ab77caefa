//! Error types for image ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("I/O error reading {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The bytes are not a valid or supported raster image.
    #[error("Failed to decode image: {0}")]
    Decode(String),
}
