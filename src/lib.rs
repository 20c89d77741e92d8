//! Color accessibility engine: hex codec, WCAG luminance and contrast,
//! palette derivation, red-green CVD simulation and design-guide assembly.
//!
//! Every color operation is a pure function of its inputs.

pub mod engine;
pub mod error;
pub mod guide;
pub mod math;
pub mod types;
pub mod units;

#[cfg(feature = "node")]
mod node;

pub use error::{ColorError, ColorResult, GuideError};
pub use math::hex::Color;
pub use math::wcag::Grade;
