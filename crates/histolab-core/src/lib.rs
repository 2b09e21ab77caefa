//! Histolab Core - Histogram transformation engine
//!
//! This crate computes per-channel intensity histograms of 8-bit images and
//! remaps intensities through linear contrast stretching and clip-limited
//! histogram equalization. It also provides image loading/saving and an
//! explicit [`Session`] for interactive shells.
//!
//! # Engine API
//!
//! - [`compute_histogram`] - per-channel 256-bin histogram
//! - [`expand`] - stretch each channel's observed range onto `[new_min, new_max]`
//! - [`equalize`] - clip-limited histogram equalization
//!
//! All three are pure: they borrow their input and return fresh values, so
//! they can run concurrently on distinct buffers.
//!
//! ```ignore
//! use histolab_core::{decode::load_image, equalize, compute_histogram};
//!
//! let image = load_image("photo.png")?;
//! let equalized = equalize(&image, 0.03);
//! let histogram = compute_histogram(&equalized);
//! ```

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod equalize;
pub mod expand;
pub mod histogram;
pub mod luminance;
pub mod lut;
pub mod session;
pub mod settings;

pub use buffer::{BufferError, ChannelLayout, ImageBuffer};
pub use equalize::{clip_threshold, equalize, EqualizationLut};
pub use expand::expand;
pub use histogram::{
    compute_histogram, compute_histogram_for_mode, compute_luminance_histogram, Bins, Histogram,
    HistogramMode,
};
pub use lut::ChannelLut;
pub use session::{DisplayState, Operation, Pane, Session, SessionError};
pub use settings::ProcessingSettings;
