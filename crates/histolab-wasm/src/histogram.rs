//! Histogram computation WASM bindings.
//!
//! Exposes the tagged core histogram to JavaScript: `is_color` tells the
//! plot whether to draw one series or three.

use histolab_core::histogram::{
    compute_histogram as compute_histogram_core, compute_histogram_for_mode, Histogram,
    HistogramMode,
};
use wasm_bindgen::prelude::*;

use crate::types::JsImageBuffer;

/// Histogram result accessible from JavaScript.
///
/// Holds one 256-bin series (grayscale or luminance) or three (RGB),
/// plus helpers for clipping detection and normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    channels: Vec<Vec<u32>>,
    max_value: u32,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// True for per-channel RGB data, false for a single series.
    #[wasm_bindgen(getter)]
    pub fn is_color(&self) -> bool {
        self.channels.len() == 3
    }

    /// Number of series (1 or 3).
    #[wasm_bindgen(getter)]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Bins of one series (256 entries), empty if out of range.
    pub fn channel(&self, index: usize) -> Vec<u32> {
        self.channels.get(index).cloned().unwrap_or_default()
    }

    /// All series as an array of `Uint32Array`s, in channel order.
    pub fn channels(&self) -> js_sys::Array {
        self.channels
            .iter()
            .map(|bins| JsValue::from(js_sys::Uint32Array::from(&bins[..])))
            .collect()
    }

    /// Get maximum bin value across all series.
    ///
    /// Useful for normalizing histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check if any series has values at 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any series has values at 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }
}

impl From<&Histogram> for JsHistogram {
    fn from(hist: &Histogram) -> Self {
        JsHistogram {
            channels: hist.channels().into_iter().map(|bins| bins.to_vec()).collect(),
            max_value: hist.max_value(),
            has_highlight_clipping: hist.has_highlight_clipping(),
            has_shadow_clipping: hist.has_shadow_clipping(),
        }
    }
}

/// Convert a u8 mode value to the core HistogramMode.
///
/// Values:
/// - 0 = RGB (per channel)
/// - 1 = Luminance
///
/// Any other value defaults to RGB.
pub(crate) fn mode_from_u8(value: u8) -> HistogramMode {
    match value {
        1 => HistogramMode::Luminance,
        _ => HistogramMode::Rgb,
    }
}

/// Compute the per-channel histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// if (hist.is_color) {
///   const [r, g, b] = hist.channels();
/// } else {
///   const gray = hist.channel(0);
/// }
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImageBuffer) -> JsHistogram {
    JsHistogram::from(&compute_histogram_core(image.as_core()))
}

/// Compute the histogram for a display mode (0 = RGB, 1 = luminance).
#[wasm_bindgen]
pub fn compute_histogram_with_mode(image: &JsImageBuffer, mode: u8) -> JsHistogram {
    JsHistogram::from(&compute_histogram_for_mode(image.as_core(), mode_from_u8(mode)))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use histolab_core::ImageBuffer;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_channels_array() {
        let img = JsImageBuffer::from_core(ImageBuffer::rgb(1, 1, vec![1, 2, 3]).unwrap());
        let channels = compute_histogram(&img).channels();
        assert_eq!(channels.length(), 3);
    }
}
