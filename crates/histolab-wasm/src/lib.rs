//! Histolab WASM - WebAssembly bindings for Histolab
//!
//! This crate provides WASM bindings to expose the histolab-core engine
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for image buffers
//! - `histogram` - Per-channel and luminance histograms
//! - `transform` - Contrast expansion and clip-limited equalization
//! - `decode` - Image decoding from file bytes (PNG, JPEG)
//! - `encode` - Image encoding (PNG, JPEG export)
//! - `session` - Interactive editing session with compare mode
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, equalize_histogram, compute_histogram } from '@histolab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const equalized = equalize_histogram(image, 0.03);
//! const hist = compute_histogram(equalized);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod histogram;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::{default_jpeg_quality, encode_jpeg, encode_png};
pub use histogram::{compute_histogram, compute_histogram_with_mode, JsHistogram};
pub use session::JsSession;
pub use transform::{equalize_histogram, expand_histogram};
pub use types::JsImageBuffer;

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
