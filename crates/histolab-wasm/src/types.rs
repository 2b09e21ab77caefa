//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly wrapper around the core
//! `ImageBuffer`, handling conversion between Rust and JavaScript
//! representations.

use histolab_core::ImageBuffer;
use wasm_bindgen::prelude::*;

/// An 8-bit grayscale or RGB image for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it into a
/// `Uint8Array`. `free()` releases the WASM side early; otherwise
/// wasm-bindgen's finalizer does it.
#[wasm_bindgen]
pub struct JsImageBuffer {
    inner: ImageBuffer,
}

#[wasm_bindgen]
impl JsImageBuffer {
    /// Create an image from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 for grayscale, 3 for RGB
    /// * `pixels` - Interleaved samples, row-major (`width * height * channels` bytes)
    ///
    /// # Errors
    /// Returns an error if the channel count is unsupported or the pixel
    /// length doesn't match the shape.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<JsImageBuffer, JsValue> {
        ImageBuffer::from_channel_count(width, height, channels, pixels)
            .map(Self::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Samples per pixel: 1 (grayscale) or 3 (RGB)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channel_count() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns the pixels expanded to RGBA for `ImageData` / canvas display.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.inner.pixel_count() * 4);
        match self.inner.channel_count() {
            1 => {
                for &v in self.inner.pixels() {
                    rgba.extend_from_slice(&[v, v, v, 255]);
                }
            }
            _ => {
                for rgb in self.inner.pixels().chunks_exact(3) {
                    rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
                }
            }
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImageBuffer {
    pub(crate) fn from_core(inner: ImageBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn as_core(&self) -> &ImageBuffer {
        &self.inner
    }
}
