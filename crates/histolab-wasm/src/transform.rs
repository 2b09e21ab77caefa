//! WASM bindings for the histogram transformations.
//!
//! Both functions borrow the source image and return a new one, so the
//! caller can keep the original for compare views.

use crate::types::JsImageBuffer;
use histolab_core::{equalize, expand};
use wasm_bindgen::prelude::*;

/// Linearly stretch each channel's observed range onto `[new_min, new_max]`.
///
/// Channels with a single intensity map every pixel to `new_min`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const stretched = expand_histogram(image, 0, 255);
/// ```
#[wasm_bindgen]
pub fn expand_histogram(image: &JsImageBuffer, new_min: u8, new_max: u8) -> JsImageBuffer {
    JsImageBuffer::from_core(expand(image.as_core(), new_min, new_max))
}

/// Clip-limited histogram equalization, per channel.
///
/// # Arguments
///
/// * `image` - Source image
/// * `clip_limit` - Clip fraction; larger values allow stronger contrast
///   (the slider range is 0.0 to 0.1)
#[wasm_bindgen]
pub fn equalize_histogram(image: &JsImageBuffer, clip_limit: f64) -> JsImageBuffer {
    JsImageBuffer::from_core(equalize(image.as_core(), clip_limit))
}
