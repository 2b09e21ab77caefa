//! Image decoding WASM bindings.
//!
//! Browsers have no filesystem, so images arrive as file bytes. The format
//! (PNG or JPEG) is detected from the content.

use crate::types::JsImageBuffer;
use histolab_core::decode;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into an image.
///
/// Grayscale sources stay single-channel; everything else becomes RGB.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}, ${image.channels} channel(s)`);
/// ```
///
/// # Errors
/// Returns an error string if the bytes are not a decodable image.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImageBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsImageBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
