//! Per-channel 256-entry lookup tables.
//!
//! Both intensity transformations reduce to one table per channel: since
//! samples are 8-bit, the mapping is computed once for every possible input
//! and then applied with a single table lookup per sample.

use crate::buffer::ImageBuffer;

/// Pre-computed lookup table for one channel: `lut[input] = output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLut {
    pub lut: [u8; 256],
}

impl ChannelLut {
    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = i as u8;
        }
        Self { lut }
    }

    /// LUT mapping every input to `value`.
    pub fn constant(value: u8) -> Self {
        Self { lut: [value; 256] }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }
}

impl Default for ChannelLut {
    fn default() -> Self {
        Self::identity()
    }
}

/// Map every sample of `buffer` through the LUT of its channel.
///
/// `luts` holds one table per channel, in channel order. The input is left
/// untouched; the result has the same shape and layout.
pub fn apply_channel_luts(buffer: &ImageBuffer, luts: &[ChannelLut]) -> ImageBuffer {
    let channels = buffer.channel_count();
    debug_assert_eq!(
        luts.len(),
        channels,
        "Expected one LUT per channel ({}), got {}",
        channels,
        luts.len()
    );

    let mut pixels = buffer.pixels().to_vec();
    for pixel in pixels.chunks_exact_mut(channels) {
        for (sample, lut) in pixel.iter_mut().zip(luts) {
            *sample = lut.map(*sample);
        }
    }

    buffer.with_pixels(pixels)
}
