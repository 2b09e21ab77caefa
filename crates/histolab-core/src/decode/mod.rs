//! Image ingestion.
//!
//! This module turns files and in-memory bytes into [`ImageBuffer`]s:
//! - Loading from a filesystem path, with distinct errors for a missing
//!   file, an unreadable file, and undecodable contents
//! - Decoding from bytes, for shells without filesystem access
//!
//! Format detection and decoding are delegated to the `image` crate
//! (PNG and JPEG are enabled).
//!
//! # Examples
//!
//! ```ignore
//! use histolab_core::decode::load_image;
//!
//! let image = load_image("photo.png")?;
//! println!("Loaded {}x{} image", image.width(), image.height());
//! ```
//!
//! [`ImageBuffer`]: crate::buffer::ImageBuffer

mod reader;
mod types;

pub use reader::{decode_image, load_image};
pub use types::DecodeError;
