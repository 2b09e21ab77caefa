//! Editing session owned by the interactive shell.
//!
//! A [`Session`] holds the loaded image, the most recent transformation
//! result, the compare-mode flag and the current [`ProcessingSettings`].
//! The shell keeps one session and calls into it on every user action; the
//! session decides which buffers and histograms the display should show.

use std::path::Path;

use thiserror::Error;

use crate::buffer::ImageBuffer;
use crate::decode::{load_image, DecodeError};
use crate::encode::{save_image, EncodeError};
use crate::equalize::equalize;
use crate::expand::expand;
use crate::histogram::{compute_histogram_for_mode, Histogram, HistogramMode};
use crate::settings::ProcessingSettings;

/// Errors surfaced to the shell.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The action needs a loaded image.
    #[error("No image loaded")]
    NoImage,

    /// Saving was requested before any transformation ran.
    #[error("No processed image to save")]
    NoProcessedImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The transformation that produced the processed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Expansion { new_min: u8, new_max: u8 },
    Equalization { clip_limit: f64 },
}

/// One image pane of the display, with its histogram.
#[derive(Debug, Clone)]
pub struct Pane<'a> {
    pub image: &'a ImageBuffer,
    pub histogram: Histogram,
}

impl<'a> Pane<'a> {
    fn new(image: &'a ImageBuffer, mode: HistogramMode) -> Self {
        Self {
            image,
            histogram: compute_histogram_for_mode(image, mode),
        }
    }
}

/// What the display should show.
///
/// In normal mode only `primary` is populated, holding the latest result
/// (or the original before any transformation). In compare mode `primary`
/// holds the original and `secondary` the processed image, if any.
#[derive(Debug, Clone, Default)]
pub struct DisplayState<'a> {
    pub primary: Option<Pane<'a>>,
    pub secondary: Option<Pane<'a>>,
}

/// Interactive editing state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    original: Option<ImageBuffer>,
    processed: Option<ImageBuffer>,
    compare_mode: bool,
    last_applied: Option<Operation>,
    settings: ProcessingSettings,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ProcessingSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Load an image file, replacing any previous image.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&ImageBuffer, SessionError> {
        let buffer = load_image(path.as_ref()).inspect_err(|e| log::warn!("Load failed: {}", e))?;
        Ok(self.set_image(buffer))
    }

    /// Install an already-decoded image, discarding previous results.
    pub fn set_image(&mut self, buffer: ImageBuffer) -> &ImageBuffer {
        self.processed = None;
        self.last_applied = None;
        self.compare_mode = false;
        self.original.insert(buffer)
    }

    /// Stretch the loaded image onto `[new_min, new_max]`.
    pub fn apply_expansion(&mut self, new_min: u8, new_max: u8) -> Result<&ImageBuffer, SessionError> {
        let source = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let result = expand(source, new_min, new_max);

        self.settings.expand_min = new_min;
        self.settings.expand_max = new_max;
        Ok(self.store(result, Operation::Expansion { new_min, new_max }))
    }

    /// Equalize the loaded image with `clip_limit`.
    pub fn apply_equalization(&mut self, clip_limit: f64) -> Result<&ImageBuffer, SessionError> {
        let source = self.original.as_ref().ok_or(SessionError::NoImage)?;
        let result = equalize(source, clip_limit);

        self.settings.clip_limit = clip_limit;
        Ok(self.store(result, Operation::Equalization { clip_limit }))
    }

    /// Re-run the last transformation with the current settings.
    ///
    /// Returns `Ok(None)` if nothing has been applied yet.
    pub fn reapply(&mut self) -> Result<Option<&ImageBuffer>, SessionError> {
        match self.last_applied {
            None => Ok(None),
            Some(Operation::Expansion { .. }) => {
                let (lo, hi) = (self.settings.expand_min, self.settings.expand_max);
                self.apply_expansion(lo, hi).map(Some)
            }
            Some(Operation::Equalization { .. }) => {
                let clip_limit = self.settings.clip_limit;
                self.apply_equalization(clip_limit).map(Some)
            }
        }
    }

    fn store(&mut self, result: ImageBuffer, operation: Operation) -> &ImageBuffer {
        log::debug!("Applied {:?}", operation);
        self.last_applied = Some(operation);
        self.processed.insert(result)
    }

    /// Flip compare mode, returning the new state.
    pub fn toggle_compare(&mut self) -> Result<bool, SessionError> {
        if self.original.is_none() {
            return Err(SessionError::NoImage);
        }
        self.compare_mode = !self.compare_mode;
        Ok(self.compare_mode)
    }

    /// Restore the default transformation parameters and drop any processed
    /// result. The histogram mode is a display choice and is kept.
    pub fn reset(&mut self) {
        self.settings = ProcessingSettings {
            histogram_mode: self.settings.histogram_mode,
            ..ProcessingSettings::default()
        };
        self.processed = None;
        self.last_applied = None;
        self.compare_mode = false;
    }

    pub fn set_histogram_mode(&mut self, mode: HistogramMode) {
        self.settings.histogram_mode = mode;
    }

    /// Write the processed image to `path` (format from the extension).
    pub fn save_processed<P: AsRef<Path>>(&self, path: P) -> Result<(), SessionError> {
        let processed = self.processed_or_err()?;
        save_image(processed, path).inspect_err(|e| log::warn!("Save failed: {}", e))?;
        Ok(())
    }

    /// The processed image, or `NoProcessedImage`.
    pub fn processed_or_err(&self) -> Result<&ImageBuffer, SessionError> {
        self.processed.as_ref().ok_or(SessionError::NoProcessedImage)
    }

    /// Panes the display should show, with histograms in the current mode.
    pub fn display(&self) -> DisplayState<'_> {
        let mode = self.settings.histogram_mode;

        if self.compare_mode {
            DisplayState {
                primary: self.original.as_ref().map(|image| Pane::new(image, mode)),
                secondary: self.processed.as_ref().map(|image| Pane::new(image, mode)),
            }
        } else {
            DisplayState {
                primary: self
                    .processed
                    .as_ref()
                    .or(self.original.as_ref())
                    .map(|image| Pane::new(image, mode)),
                secondary: None,
            }
        }
    }

    pub fn original(&self) -> Option<&ImageBuffer> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&ImageBuffer> {
        self.processed.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub fn last_applied(&self) -> Option<Operation> {
        self.last_applied
    }

    pub fn settings(&self) -> &ProcessingSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ProcessingSettings {
        &mut self.settings
    }
}
