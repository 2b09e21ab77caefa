//! In-memory 8-bit image buffers.
//!
//! An [`ImageBuffer`] is a rectangular grid of interleaved `u8` samples with
//! either one (grayscale) or three (RGB) channels per pixel. Buffers are
//! never mutated by the transformation functions; each transformation
//! returns a fresh buffer of the same shape.

use image::{DynamicImage, GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a buffer from untrusted raw data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Pixel data length doesn't match the declared shape.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The declared shape overflows addressable memory.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Only 1 (grayscale) and 3 (RGB) channels are supported.
    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(u8),
}

/// Channel layout of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// One luminance sample per pixel.
    Gray,
    /// Red, green and blue samples per pixel, in that order.
    Rgb,
}

impl ChannelLayout {
    /// Number of samples per pixel.
    #[inline]
    pub fn channel_count(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb => 3,
        }
    }

    /// Layout for a raw channel count, if supported.
    pub fn from_channel_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(ChannelLayout::Gray),
            3 => Some(ChannelLayout::Rgb),
            _ => None,
        }
    }
}

/// A decoded 8-bit image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    /// Interleaved samples in row-major order.
    pixels: Vec<u8>,
}

/// `width * height * channels`, or `InvalidDimensions` if it overflows `usize`.
fn sample_count(width: u32, height: u32, layout: ChannelLayout) -> Result<usize, BufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(layout.channel_count()))
        .ok_or(BufferError::InvalidDimensions { width, height })
}

impl ImageBuffer {
    /// Create a buffer, checking that `pixels` matches the declared shape.
    pub fn new(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, BufferError> {
        let expected = sample_count(width, height, layout)?;

        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Create a grayscale buffer.
    pub fn gray(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        Self::new(width, height, ChannelLayout::Gray, pixels)
    }

    /// Create an RGB buffer.
    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        Self::new(width, height, ChannelLayout::Rgb, pixels)
    }

    /// Create a buffer from a raw channel count (1 or 3).
    pub fn from_channel_count(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, BufferError> {
        let layout = ChannelLayout::from_channel_count(channels)
            .ok_or(BufferError::UnsupportedChannels(channels))?;
        Self::new(width, height, layout, pixels)
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        value: u8,
    ) -> Result<Self, BufferError> {
        let len = sample_count(width, height, layout)?;
        Ok(Self {
            width,
            height,
            layout,
            pixels: vec![value; len],
        })
    }

    /// Same shape as `self`, new samples. Callers must keep the length.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel buffer size mismatch");
        Self {
            width: self.width,
            height: self.height,
            layout: self.layout,
            pixels,
        }
    }

    /// Convert a decoded image, normalizing to 8-bit gray or RGB.
    ///
    /// Luma images (with or without alpha) become [`ChannelLayout::Gray`];
    /// everything else becomes [`ChannelLayout::Rgb`] with alpha dropped.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_color() {
            Self::from_rgb_image(img.into_rgb8())
        } else {
            Self::from_gray_image(img.into_luma8())
        }
    }

    /// Create a grayscale buffer from an image::GrayImage.
    pub fn from_gray_image(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Gray,
            pixels: img.into_raw(),
        }
    }

    /// Create an RGB buffer from an image::RgbImage.
    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Rgb,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::DynamicImage for encoding.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        match self.layout {
            ChannelLayout::Gray => GrayImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(DynamicImage::ImageLuma8),
            ChannelLayout::Rgb => RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(DynamicImage::ImageRgb8),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Samples per pixel (1 or 3).
    pub fn channel_count(&self) -> usize {
        self.layout.channel_count()
    }

    pub fn is_color(&self) -> bool {
        self.layout == ChannelLayout::Rgb
    }

    /// Interleaved samples in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Total number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Iterate the samples of one channel.
    pub fn channel(&self, index: usize) -> impl Iterator<Item = u8> + '_ {
        debug_assert!(index < self.channel_count(), "Channel {} out of range", index);
        self.pixels
            .iter()
            .skip(index)
            .step_by(self.channel_count())
            .copied()
    }

    /// Smallest and largest sample in one channel, or `None` if empty.
    pub fn channel_range(&self, index: usize) -> Option<(u8, u8)> {
        self.channel(index).fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
