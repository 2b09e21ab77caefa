//! Transformation parameters as the interactive shell edits them.
//!
//! The shell drives three controls: the expansion range bounds and a
//! clip-limit slider. Slider positions are integers; [`clip_limit_from_slider`]
//! maps them onto the clip fraction the equalizer takes.

use serde::{Deserialize, Serialize};

use crate::histogram::HistogramMode;

/// Largest clip-limit slider position (maps to a clip limit of 0.1).
pub const CLIP_SLIDER_MAX: u32 = 1000;

/// Divisor from slider position to clip fraction.
pub const CLIP_SLIDER_SCALE: f64 = 10_000.0;

/// Slider position restored on reset.
pub const DEFAULT_CLIP_SLIDER: u32 = 30;

/// Convert a clip-limit slider position to a clip fraction.
///
/// Positions above [`CLIP_SLIDER_MAX`] are clamped.
pub fn clip_limit_from_slider(position: u32) -> f64 {
    position.min(CLIP_SLIDER_MAX) as f64 / CLIP_SLIDER_SCALE
}

/// Current transformation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// Lower bound of the expansion range (0 to 254)
    pub expand_min: u8,
    /// Upper bound of the expansion range (1 to 255)
    pub expand_max: u8,
    /// Equalization clip fraction (0.0 to 0.1)
    pub clip_limit: f64,
    /// Histogram shown by the display
    pub histogram_mode: HistogramMode,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            expand_min: 0,
            expand_max: 255,
            clip_limit: clip_limit_from_slider(DEFAULT_CLIP_SLIDER),
            histogram_mode: HistogramMode::default(),
        }
    }
}

impl ProcessingSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check that the expansion range is non-empty.
    pub fn has_valid_range(&self) -> bool {
        self.expand_min < self.expand_max
    }

    /// Slider position closest to the current clip limit.
    pub fn clip_slider_position(&self) -> u32 {
        let position = (self.clip_limit * CLIP_SLIDER_SCALE).round();
        position.clamp(0.0, CLIP_SLIDER_MAX as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ProcessingSettings::new();
        assert!(settings.is_default());
        assert_eq!(settings.expand_min, 0);
        assert_eq!(settings.expand_max, 255);
        assert!((settings.clip_limit - 0.003).abs() < 1e-12);
        assert_eq!(settings.histogram_mode, HistogramMode::Rgb);
        assert!(settings.has_valid_range());
    }

    #[test]
    fn test_not_default() {
        let mut settings = ProcessingSettings::new();
        settings.clip_limit = 0.05;
        assert!(!settings.is_default());
    }

    #[test]
    fn test_invalid_range() {
        let mut settings = ProcessingSettings::new();
        settings.expand_min = 200;
        settings.expand_max = 200;
        assert!(!settings.has_valid_range());
    }

    #[test]
    fn test_slider_mapping() {
        assert_eq!(clip_limit_from_slider(0), 0.0);
        assert!((clip_limit_from_slider(CLIP_SLIDER_MAX) - 0.1).abs() < 1e-12);
        assert!((clip_limit_from_slider(300) - 0.03).abs() < 1e-12);
        // Clamped
        assert_eq!(clip_limit_from_slider(5000), clip_limit_from_slider(CLIP_SLIDER_MAX));
    }

    #[test]
    fn test_slider_position_round_trip() {
        for position in [0, 1, 30, 333, CLIP_SLIDER_MAX] {
            let mut settings = ProcessingSettings::new();
            settings.clip_limit = clip_limit_from_slider(position);
            assert_eq!(settings.clip_slider_position(), position);
        }
    }

    #[test]
    fn test_slider_position_clamps_out_of_range_limits() {
        let mut settings = ProcessingSettings::new();
        settings.clip_limit = 5.0;
        assert_eq!(settings.clip_slider_position(), CLIP_SLIDER_MAX);
        settings.clip_limit = -1.0;
        assert_eq!(settings.clip_slider_position(), 0);
    }
}
