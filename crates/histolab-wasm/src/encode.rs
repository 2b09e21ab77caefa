//! Image encoding WASM bindings.
//!
//! Used by the export workflow to turn a processed image into file bytes.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@histolab/wasm';
//!
//! const pngBytes = encode_png(processed);
//! const jpegBytes = encode_jpeg(processed, 90);
//! ```

use crate::types::JsImageBuffer;
use histolab_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image as PNG (lossless).
///
/// # Errors
/// Returns an error if the image has zero width or height.
#[wasm_bindgen]
pub fn encode_png(image: &JsImageBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_core()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as JPEG.
///
/// # Arguments
///
/// * `image` - Grayscale or RGB image
/// * `quality` - JPEG quality (1-100, recommended: 90). Out-of-range values
///   are clamped.
///
/// # Errors
/// Returns an error if the image has zero width or height, or encoding fails.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsImageBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.as_core(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default JPEG quality for exports.
#[wasm_bindgen]
pub fn default_jpeg_quality() -> u8 {
    encode::DEFAULT_JPEG_QUALITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quality() {
        assert_eq!(default_jpeg_quality(), 90);
    }
}
