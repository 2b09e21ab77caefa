//! Histogram computation from 8-bit pixel data.
//!
//! Grayscale buffers produce a single 256-bin series; RGB buffers produce one
//! series per channel. Bin `i` counts exactly the samples equal to `i`.

use serde::{Deserialize, Serialize};

use crate::buffer::{ChannelLayout, ImageBuffer};
use crate::luminance::calculate_luminance_u8;

/// 256 intensity bins; index = intensity, value = pixel count.
pub type Bins = [u32; 256];

/// Intensity histogram of a buffer, tagged by channel layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Histogram {
    /// Single series for grayscale buffers (or a luminance view).
    Grayscale(Bins),
    /// One series per RGB channel.
    Color {
        red: Bins,
        green: Bins,
        blue: Bins,
    },
}

impl Histogram {
    /// Per-channel bins in channel order.
    pub fn channels(&self) -> Vec<&Bins> {
        match self {
            Histogram::Grayscale(bins) => vec![bins],
            Histogram::Color { red, green, blue } => vec![red, green, blue],
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Histogram::Color { .. })
    }

    /// Number of samples counted in each channel.
    pub fn channel_totals(&self) -> Vec<u64> {
        self.channels().into_iter().map(bins_total).collect()
    }

    /// Find the maximum value across all channels for normalization
    pub fn max_value(&self) -> u32 {
        self.channels()
            .into_iter()
            .filter_map(|bins| bins.iter().max().copied())
            .max()
            .unwrap_or(0)
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.channels().into_iter().any(|bins| bins[255] > 0)
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.channels().into_iter().any(|bins| bins[0] > 0)
    }
}

/// Which histogram the display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistogramMode {
    /// Per-channel histograms (a single series for grayscale buffers).
    #[default]
    Rgb,
    /// A single BT.709 luminance series.
    Luminance,
}

/// Compute the per-channel histogram of a buffer.
///
/// # Example
/// ```
/// use histolab_core::{buffer::ImageBuffer, histogram::{compute_histogram, Histogram}};
///
/// let buf = ImageBuffer::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
/// let Histogram::Grayscale(bins) = compute_histogram(&buf) else { unreachable!() };
/// assert_eq!(bins[0], 2);
/// assert_eq!(bins[255], 2);
/// ```
///
/// # Performance
/// Single pass over the samples; memory usage is constant (1-3KB for bins).
pub fn compute_histogram(buffer: &ImageBuffer) -> Histogram {
    match buffer.layout() {
        ChannelLayout::Gray => Histogram::Grayscale(bin_samples(buffer.pixels().iter().copied())),
        ChannelLayout::Rgb => {
            let mut red = [0u32; 256];
            let mut green = [0u32; 256];
            let mut blue = [0u32; 256];

            for chunk in buffer.pixels().chunks_exact(3) {
                red[chunk[0] as usize] += 1;
                green[chunk[1] as usize] += 1;
                blue[chunk[2] as usize] += 1;
            }

            Histogram::Color { red, green, blue }
        }
    }
}

/// Histogram of a single channel.
pub fn channel_histogram(buffer: &ImageBuffer, channel: usize) -> Bins {
    bin_samples(buffer.channel(channel))
}

/// Histogram of ITU-R BT.709 luminance.
///
/// Grayscale samples are binned directly.
pub fn compute_luminance_histogram(buffer: &ImageBuffer) -> Bins {
    match buffer.layout() {
        ChannelLayout::Gray => bin_samples(buffer.pixels().iter().copied()),
        ChannelLayout::Rgb => bin_samples(
            buffer
                .pixels()
                .chunks_exact(3)
                .map(|rgb| calculate_luminance_u8(rgb[0], rgb[1], rgb[2])),
        ),
    }
}

/// Histogram for the selected display mode.
pub fn compute_histogram_for_mode(buffer: &ImageBuffer, mode: HistogramMode) -> Histogram {
    match mode {
        HistogramMode::Rgb => compute_histogram(buffer),
        HistogramMode::Luminance => Histogram::Grayscale(compute_luminance_histogram(buffer)),
    }
}

/// Sum of all bins.
pub fn bins_total(bins: &Bins) -> u64 {
    bins.iter().map(|&count| count as u64).sum()
}

fn bin_samples(samples: impl IntoIterator<Item = u8>) -> Bins {
    let mut bins = [0u32; 256];
    for v in samples {
        bins[v as usize] += 1;
    }
    bins
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = ImageBuffer> {
        (1u32..=24, 1u32..=24, prop::bool::ANY).prop_flat_map(|(width, height, color)| {
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
        /// Property: every channel counts each pixel exactly once.
        #[test]
        fn prop_channel_sums_equal_pixel_count(buf in buffer_strategy()) {
            let hist = compute_histogram(&buf);
            let expected_channels = if buf.is_color() { 3 } else { 1 };
            prop_assert_eq!(hist.channels().len(), expected_channels);
            for total in hist.channel_totals() {
                prop_assert_eq!(total, buf.pixel_count() as u64);
            }
        }

        /// Property: luminance histogram counts each pixel once.
        #[test]
        fn prop_luminance_sum_equals_pixel_count(buf in buffer_strategy()) {
            let luma = compute_luminance_histogram(&buf);
            prop_assert_eq!(bins_total(&luma), buf.pixel_count() as u64);
        }
    }
}
