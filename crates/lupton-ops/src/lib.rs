//! # lupton-ops
//!
//! Combine up to three aligned exposures into an 8-bit colour image with
//! the brightness-preserving asinh stretch of Lupton et al. (2004),
//! PASP 116, 133.
//!
//! # Modules
//!
//! - [`intensity`] - Naive total intensity of the R, G, B planes
//! - [`mapping`] - The [`Mapping`] trait and its linear / asinh / auto-limit variants
//! - [`limits`] - Collaborator trait for estimating display limits
//! - [`resize`] - Output size requests
//! - [`lupton`] - The [`make_lupton_rgb`] convenience entry point
//!
//! # Example
//!
//! ```rust
//! use lupton_core::Plane;
//! use lupton_ops::{make_lupton_rgb, LuptonParams};
//!
//! let r = Plane::filled(4, 4, 12.0);
//! let g = Plane::filled(4, 4, 8.0);
//! let b = Plane::filled(4, 4, 2.0);
//!
//! let rgb = make_lupton_rgb(&r, Some(&g), Some(&b), &LuptonParams::default(), None).unwrap();
//! assert_eq!(rgb.shape(), (4, 4, 3));
//! ```
//!
//! # Colour preservation
//!
//! Every channel of a pixel is multiplied by the same factor derived from
//! the pixel's total intensity, so hue survives the stretch. When the
//! brightest channel would exceed 255 the whole triplet is scaled down
//! together instead of clipping channels independently.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod intensity;
pub mod limits;
pub mod lupton;
pub mod mapping;
pub mod resize;

pub use intensity::compute_intensity;
pub use limits::{LimitEstimator, MinMaxInterval, PercentileInterval};
pub use lupton::{make_lupton_rgb, LuptonParams};
pub use mapping::{AsinhMapping, AsinhZScaleMapping, LinearMapping, Mapping};
pub use resize::ResizeOptions;

pub use lupton_core::{Error, Result};
