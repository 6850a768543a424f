//! # lupton-core
//!
//! Core types for composing colour images from astronomical exposures.
//!
//! This crate provides the foundational types shared by the lupton crates:
//!
//! - [`Plane`] - Owned 2-D buffer holding one channel of samples
//! - [`Sample`] - Numeric element types a [`Plane`] can be built from
//! - [`Triple`] - Per-channel parameter (scalar broadcast or one value per band)
//! - [`RgbImage8`] - Interleaved `(H, W, 3)` 8-bit output image
//! - [`Resampler`] - Collaborator trait for resizing planes
//! - [`Error`] - Unified error type
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. Everything else builds on it:
//!
//! ```text
//! lupton-core (this crate)
//!    ^
//!    |
//!    +-- lupton-ops (intensity mapping, make_lupton_rgb)
//!    +-- lupton-io  (file I/O, image-crate resampler)
//!    +-- lupton-cli (the `lupton` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod plane;
pub mod resample;
pub mod rgb;
pub mod sample;
pub mod triple;

// Re-exports for convenience
pub use error::*;
pub use plane::Plane;
pub use resample::Resampler;
pub use rgb::RgbImage8;
pub use sample::Sample;
pub use triple::Triple;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lupton_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::plane::Plane;
    pub use crate::resample::Resampler;
    pub use crate::rgb::RgbImage8;
    pub use crate::sample::Sample;
    pub use crate::triple::Triple;
}
