/// Shared types, ramps, and configuration for asciitone.
///
/// This crate contains the data records passed between the loader,
/// the quantizer and the renderer.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{Ramp, RampPreset};
pub use config::{RenderConfig, ToneParams};
pub use error::CoreError;
pub use frame::{AsciiCell, AsciiGrid, RgbFrame};
