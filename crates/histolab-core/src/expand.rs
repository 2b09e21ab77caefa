//! Linear contrast stretching.
//!
//! Each channel's observed range `[L, H]` is mapped linearly onto a target
//! range `[new_min, new_max]`:
//!
//! `output = clip((v - L) / (H - L) * (new_max - new_min) + new_min, new_min, new_max)`
//!
//! truncated to an 8-bit integer. A constant channel (`H == L`) is filled
//! with `new_min`, clipped the same way.

use crate::buffer::ImageBuffer;
use crate::lut::{apply_channel_luts, ChannelLut};

/// Stretch every channel of `buffer` onto `[new_min, new_max]`.
///
/// Channels are stretched independently, each with its own observed range.
/// Callers are expected to pass `new_min < new_max`. An inverted range does
/// not panic: the final clip collapses every sample to `new_max`.
///
/// # Example
/// ```
/// use histolab_core::{buffer::ImageBuffer, expand::expand};
///
/// let buf = ImageBuffer::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
/// let out = expand(&buf, 100, 200);
/// assert_eq!(out.pixels(), &[100, 100, 200, 200]);
/// ```
pub fn expand(buffer: &ImageBuffer, new_min: u8, new_max: u8) -> ImageBuffer {
    let luts: Vec<ChannelLut> = (0..buffer.channel_count())
        .map(|channel| {
            let range = buffer.channel_range(channel);
            log::debug!(
                "expand: channel {} range {:?} -> [{}, {}]",
                channel,
                range,
                new_min,
                new_max
            );
            expansion_lut(range, new_min, new_max)
        })
        .collect();

    apply_channel_luts(buffer, &luts)
}

/// LUT stretching the observed `range` onto `[new_min, new_max]`.
///
/// `None` (empty channel) and single-valued ranges map everything to
/// `new_min`, or to `new_max` when the target range is inverted.
pub fn expansion_lut(range: Option<(u8, u8)>, new_min: u8, new_max: u8) -> ChannelLut {
    let (low, high) = match range {
        Some((low, high)) if high > low => (low, high),
        _ => return ChannelLut::constant(new_min.min(new_max)),
    };

    let span_in = (high - low) as f64;
    let span_out = new_max as f64 - new_min as f64;
    let lower = new_min as f64;
    let upper = new_max as f64;

    let mut lut = [0u8; 256];
    for (v, lut_value) in lut.iter_mut().enumerate() {
        let offset = v as f64 - low as f64;
        let stretched = (offset / span_in) * span_out + lower;
        // Lower bound first; an inverted target range settles on `upper`.
        *lut_value = stretched.max(lower).min(upper) as u8;
    }

    ChannelLut { lut }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ChannelLayout;

    #[test]
    fn test_two_by_two_full_range_is_unchanged() {
        let buf = ImageBuffer::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
        let out = expand(&buf, 0, 255);
        assert_eq!(out, buf);
    }

    #[test]
    fn test_two_by_two_narrow_range() {
        let buf = ImageBuffer::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
        let out = expand(&buf, 100, 200);
        assert_eq!(out.pixels(), &[100, 100, 200, 200]);
    }

    #[test]
    fn test_constant_channel_fills_new_min() {
        let buf = ImageBuffer::filled(4, 4, ChannelLayout::Gray, 128).unwrap();
        let out = expand(&buf, 10, 200);
        assert_eq!(out.pixel_count(), 16);
        assert!(out.pixels().iter().all(|&v| v == 10));
    }

    #[test]
    fn test_full_range_gradient_is_identity() {
        let pixels: Vec<u8> = (0..=255u8).collect();
        let buf = ImageBuffer::gray(256, 1, pixels).unwrap();
        let out = expand(&buf, 0, 255);
        for (&before, &after) in buf.pixels().iter().zip(out.pixels()) {
            assert!(before.abs_diff(after) <= 1, "{} -> {}", before, after);
        }
        assert_eq!(out.pixels()[0], 0);
        assert_eq!(out.pixels()[255], 255);
    }

    #[test]
    fn test_divides_before_scaling() {
        // 29 / 100 * 100 lands just below 29 and truncates
        let pixels: Vec<u8> = (0..=100u8).collect();
        let buf = ImageBuffer::gray(101, 1, pixels).unwrap();
        let out = expand(&buf, 0, 100);
        assert_eq!(out.pixels()[29], 28);
        assert_eq!(out.pixels()[50], 50);
        assert_eq!(out.pixels()[100], 100);
    }

    #[test]
    fn test_inverted_range_collapses_to_new_max() {
        let buf = ImageBuffer::gray(2, 1, vec![0, 255]).unwrap();
        let out = expand(&buf, 200, 100);
        assert_eq!(out.pixels(), &[100, 100]);
    }

    #[test]
    fn test_inverted_range_constant_channel() {
        let buf = ImageBuffer::filled(2, 2, ChannelLayout::Rgb, 42).unwrap();
        let out = expand(&buf, 254, 1);
        assert!(out.pixels().iter().all(|&v| v == 1));
        assert_eq!(expansion_lut(Some((42, 42)), 254, 1), ChannelLut::constant(1));
    }

    #[test]
    fn test_stretches_narrow_input() {
        let buf = ImageBuffer::gray(3, 1, vec![100, 150, 200]).unwrap();
        let out = expand(&buf, 0, 255);
        assert_eq!(out.pixels(), &[0, 127, 255]);
    }

    #[test]
    fn test_rgb_channels_are_independent() {
        // R spans 10..20, G is constant, B spans 0..255
        let pixels = vec![10, 50, 0, 20, 50, 255];
        let buf = ImageBuffer::rgb(2, 1, pixels).unwrap();
        let out = expand(&buf, 0, 100);
        assert_eq!(out.pixels(), &[0, 0, 0, 100, 0, 100]);
        assert_eq!(out.layout(), ChannelLayout::Rgb);
    }

    #[test]
    fn test_input_not_mutated() {
        let buf = ImageBuffer::gray(2, 1, vec![3, 9]).unwrap();
        let copy = buf.clone();
        let _ = expand(&buf, 0, 255);
        assert_eq!(buf, copy);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = ImageBuffer::gray(0, 0, vec![]).unwrap();
        assert!(expand(&buf, 0, 255).is_empty());
    }

    #[test]
    fn test_expansion_lut_degenerate() {
        assert_eq!(expansion_lut(None, 7, 9), ChannelLut::constant(7));
        assert_eq!(expansion_lut(Some((4, 4)), 7, 9), ChannelLut::constant(7));
    }

    #[test]
    fn test_expansion_lut_clips_outside_observed_range() {
        let lut = expansion_lut(Some((100, 200)), 50, 150);
        assert_eq!(lut.map(0), 50);
        assert_eq!(lut.map(100), 50);
        assert_eq!(lut.map(150), 100);
        assert_eq!(lut.map(200), 150);
        assert_eq!(lut.map(255), 150);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
