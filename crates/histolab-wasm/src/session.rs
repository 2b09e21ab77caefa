//! Interactive session bindings.
//!
//! `JsSession` keeps the loaded image, the latest result and the current
//! settings on the WASM side, so the UI only passes slider values and reads
//! back what to draw.

use histolab_core::{decode, encode, ProcessingSettings, Session, SessionError};
use wasm_bindgen::prelude::*;

use crate::histogram::{mode_from_u8, JsHistogram};
use crate::types::JsImageBuffer;

fn to_js(err: SessionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Editing session for a single image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsSession();
/// session.load_bytes(bytes);
/// const result = session.apply_equalization(0.03);
/// if (session.compare_mode) {
///   drawPair(session.original(), result);
/// }
/// ```
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession {
            inner: Session::new(),
        }
    }

    /// Decode file bytes and make them the session image.
    ///
    /// # Errors
    /// Returns an error if the bytes cannot be decoded; the previous image
    /// is kept in that case.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let buffer = decode::decode_image(bytes).map_err(|e| to_js(e.into()))?;
        self.inner.set_image(buffer);
        Ok(())
    }

    /// Make an already-decoded image the session image.
    pub fn set_image(&mut self, image: &JsImageBuffer) {
        self.inner.set_image(image.as_core().clone());
    }

    /// Stretch the session image onto `[new_min, new_max]`.
    ///
    /// # Errors
    /// Returns an error if no image is loaded.
    pub fn apply_expansion(&mut self, new_min: u8, new_max: u8) -> Result<JsImageBuffer, JsValue> {
        self.inner
            .apply_expansion(new_min, new_max)
            .map(|buffer| JsImageBuffer::from_core(buffer.clone()))
            .map_err(to_js)
    }

    /// Equalize the session image with `clip_limit`.
    ///
    /// # Errors
    /// Returns an error if no image is loaded.
    pub fn apply_equalization(&mut self, clip_limit: f64) -> Result<JsImageBuffer, JsValue> {
        self.inner
            .apply_equalization(clip_limit)
            .map(|buffer| JsImageBuffer::from_core(buffer.clone()))
            .map_err(to_js)
    }

    /// Flip compare mode and return the new state.
    ///
    /// # Errors
    /// Returns an error if no image is loaded.
    pub fn toggle_compare(&mut self) -> Result<bool, JsValue> {
        self.inner.toggle_compare().map_err(to_js)
    }

    /// Restore default parameters (keeping the histogram mode) and discard
    /// the processed image.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn compare_mode(&self) -> bool {
        self.inner.compare_mode()
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Current settings as a plain object.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.settings())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the settings from a plain object. Missing fields take their
    /// default values.
    ///
    /// # Errors
    /// Returns an error if the object does not match the settings shape.
    pub fn set_settings(&mut self, value: JsValue) -> Result<(), JsValue> {
        let settings: ProcessingSettings = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        *self.inner.settings_mut() = settings;
        Ok(())
    }

    /// Select the histogram shown by the display (0 = RGB, 1 = luminance).
    pub fn set_histogram_mode(&mut self, mode: u8) {
        self.inner.set_histogram_mode(mode_from_u8(mode));
    }

    /// The loaded image, if any.
    pub fn original(&self) -> Option<JsImageBuffer> {
        self.inner.original().cloned().map(JsImageBuffer::from_core)
    }

    /// The latest transformation result, if any.
    pub fn processed(&self) -> Option<JsImageBuffer> {
        self.inner.processed().cloned().map(JsImageBuffer::from_core)
    }

    /// Image for the main pane: the original in compare mode, otherwise the
    /// latest result (or the original before any transformation).
    pub fn primary_image(&self) -> Option<JsImageBuffer> {
        self.inner
            .display()
            .primary
            .map(|pane| JsImageBuffer::from_core(pane.image.clone()))
    }

    /// Histogram for the main pane, in the current histogram mode.
    pub fn primary_histogram(&self) -> Option<JsHistogram> {
        self.inner.display().primary.map(|pane| JsHistogram::from(&pane.histogram))
    }

    /// Histogram for the processed pane; only set in compare mode.
    pub fn secondary_histogram(&self) -> Option<JsHistogram> {
        self.inner.display().secondary.map(|pane| JsHistogram::from(&pane.histogram))
    }

    /// Encode the processed image as PNG for download.
    ///
    /// # Errors
    /// Returns an error if nothing has been processed yet.
    pub fn export_processed_png(&self) -> Result<Vec<u8>, JsValue> {
        let processed = self.inner.processed_or_err().map_err(to_js)?;
        encode::encode_png(processed).map_err(|e| to_js(e.into()))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use histolab_core::ImageBuffer;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session_with_image() -> JsSession {
        let mut session = JsSession::new();
        let image = ImageBuffer::gray(2, 2, vec![50, 50, 100, 100]).unwrap();
        session.set_image(&JsImageBuffer::from_core(image));
        session
    }

    #[wasm_bindgen_test]
    fn test_apply_without_image_fails() {
        let mut session = JsSession::new();
        assert!(session.apply_expansion(0, 255).is_err());
        assert!(session.apply_equalization(0.03).is_err());
        assert!(session.toggle_compare().is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_expansion() {
        let mut session = session_with_image();
        let out = session.apply_expansion(0, 255).unwrap();
        assert_eq!(out.pixels(), vec![0, 0, 255, 255]);
        assert_eq!(session.primary_image().unwrap().pixels(), vec![0, 0, 255, 255]);
    }

    #[wasm_bindgen_test]
    fn test_compare_mode_panes() {
        let mut session = session_with_image();
        session.apply_equalization(0.1).unwrap();
        assert!(session.toggle_compare().unwrap());

        assert_eq!(session.primary_image().unwrap().pixels(), vec![50, 50, 100, 100]);
        assert!(session.secondary_histogram().is_some());
    }

    #[wasm_bindgen_test]
    fn test_export_requires_processed() {
        let mut session = session_with_image();
        assert!(session.export_processed_png().is_err());
        session.apply_expansion(0, 255).unwrap();
        assert!(session.export_processed_png().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_settings_round_trip() {
        let mut session = session_with_image();
        session.apply_expansion(10, 200).unwrap();
        let value = session.settings().unwrap();

        let mut other = JsSession::new();
        other.set_settings(value).unwrap();
        assert_eq!(other.inner.settings().expand_min, 10);
        assert_eq!(other.inner.settings().expand_max, 200);
    }

    #[wasm_bindgen_test]
    fn test_load_bytes_invalid() {
        let mut session = JsSession::new();
        assert!(session.load_bytes(&[1, 2, 3]).is_err());
        assert!(!session.has_image());
    }
}
