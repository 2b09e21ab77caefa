//! Clip-limited histogram equalization.
//!
//! Each channel is remapped through its own cumulative histogram after the
//! bins have been clipped to a threshold derived from `clip_limit`:
//!
//! 1. 256-bin histogram of the channel, `total` = sum of bins
//! 2. `max_clip = floor(total * (1 - exp(-10 * clip_limit)))`
//! 3. every bin clipped to `max_clip`, plus an even share of the excess
//! 4. cumulative sum, normalized onto [0, 255]
//! 5. `output = cdf_norm[v]` truncated to 8 bits
//!
//! The exponential threshold saturates: `clip_limit = 0` clips every bin to
//! zero (each channel collapses to 0), while large limits approach plain
//! global equalization.

use crate::buffer::ImageBuffer;
use crate::histogram::{bins_total, channel_histogram, Bins};
use crate::lut::{apply_channel_luts, ChannelLut};

/// Steepness of the clip threshold curve.
pub const CLIP_EXPONENT: f64 = 10.0;

/// Added to the CDF span so a constant channel does not divide by zero.
pub const CDF_EPSILON: f64 = 1e-10;

/// Clip threshold for a channel of `total` samples.
///
/// Negative and NaN limits are treated as zero.
pub fn clip_threshold(total: u64, clip_limit: f64) -> u64 {
    let clip_limit = if clip_limit.is_nan() {
        0.0
    } else {
        clip_limit.max(0.0)
    };
    let fraction = 1.0 - (-CLIP_EXPONENT * clip_limit).exp();
    (total as f64 * fraction).floor() as u64
}

/// Equalization mapping for one channel, with the intermediate quantities
/// the histogram display reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizationLut {
    pub lut: ChannelLut,
    /// Bin ceiling applied before accumulation.
    pub max_clip: u64,
    /// Counts redistributed across all bins.
    pub excess: u64,
}

impl EqualizationLut {
    /// Build the mapping from a channel histogram.
    pub fn from_bins(bins: &Bins, clip_limit: f64) -> Self {
        let total = bins_total(bins);
        let max_clip = clip_threshold(total, clip_limit);

        let clipped: Vec<u64> = bins.iter().map(|&count| (count as u64).min(max_clip)).collect();

        // Measured after clipping, so always zero and the redistribution
        // below adds nothing. Pre-clip excess would be the CLAHE-style
        // alternative.
        let excess: u64 = clipped
            .iter()
            .filter(|&&count| count == max_clip)
            .map(|&count| count - max_clip)
            .sum();
        let share = excess / 256;

        let mut cdf = [0u64; 256];
        let mut running = 0u64;
        for (slot, &count) in cdf.iter_mut().zip(&clipped) {
            running += count.min(max_clip) + share;
            *slot = running;
        }

        let cdf_min = cdf.iter().copied().min().unwrap_or(0);
        let cdf_max = cdf.iter().copied().max().unwrap_or(0);
        let span = (cdf_max - cdf_min) as f64 + CDF_EPSILON;

        let mut lut = [0u8; 256];
        for (lut_value, &c) in lut.iter_mut().zip(&cdf) {
            let normalized = (c - cdf_min) as f64 * 255.0 / span;
            *lut_value = normalized as u8;
        }

        Self {
            lut: ChannelLut { lut },
            max_clip,
            excess,
        }
    }
}

/// Equalize every channel of `buffer` with the given clip limit.
///
/// `clip_limit` is a fraction, conventionally in [0, 0.1]. Channels are
/// processed independently; the result has the same shape and layout.
pub fn equalize(buffer: &ImageBuffer, clip_limit: f64) -> ImageBuffer {
    let luts: Vec<ChannelLut> = (0..buffer.channel_count())
        .map(|channel| {
            let mapping = EqualizationLut::from_bins(&channel_histogram(buffer, channel), clip_limit);
            log::debug!(
                "equalize: channel {} clip_limit {} max_clip {} excess {}",
                channel,
                clip_limit,
                mapping.max_clip,
                mapping.excess
            );
            mapping.lut
        })
        .collect();

    apply_channel_luts(buffer, &luts)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::ChannelLayout;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = ImageBuffer> {
        (1u32..=16, 1u32..=16, prop::bool::ANY).prop_flat_map(|(width, height, color)| {
            let layout = if color {
                ChannelLayout::Rgb
            } else {
                ChannelLayout::Gray
            };
            let size = (width * height) as usize * layout.channel_count();
            prop::collection::vec(any::<u8>(), size..=size).prop_map(move |pixels| {
                ImageBuffer::new(width, height, layout, pixels).unwrap()
            })
        })
    }

    proptest! {
        /// Property: shape and layout are preserved for any clip limit.
        #[test]
        fn prop_shape_preserved(buf in buffer_strategy(), clip_limit in 0.0f64..=0.1) {
            let out = equalize(&buf, clip_limit);
            prop_assert_eq!(out.width(), buf.width());
            prop_assert_eq!(out.height(), buf.height());
            prop_assert_eq!(out.layout(), buf.layout());
        }

        /// Property: the mapping never reorders intensities.
        #[test]
        fn prop_lut_monotonic(bins in prop::array::uniform32(0u32..1000), clip_limit in 0.0f64..=1.0) {
            let mut full = [0u32; 256];
            for (i, count) in bins.iter().enumerate() {
                full[i * 8] = *count;
            }
            let mapping = EqualizationLut::from_bins(&full, clip_limit);
            prop_assert!(mapping.lut.lut.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Property: no bin survives above the clip threshold, so nothing is redistributed.
        #[test]
        fn prop_excess_zero(buf in buffer_strategy(), clip_limit in 0.0f64..=1.0) {
            for channel in 0..buf.channel_count() {
                let bins = channel_histogram(&buf, channel);
                let mapping = EqualizationLut::from_bins(&bins, clip_limit);
                prop_assert_eq!(mapping.excess, 0);
                prop_assert!(mapping.max_clip <= buf.pixel_count() as u64);
            }
        }

        /// Property: a zero clip limit yields an all-zero buffer.
        #[test]
        fn prop_zero_clip_is_constant(buf in buffer_strategy()) {
            let out = equalize(&buf, 0.0);
            prop_assert!(out.pixels().iter().all(|&v| v == 0));
        }
    }
}
