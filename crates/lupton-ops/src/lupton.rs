//! One-call RGB composition with an asinh stretch.
//!
//! # Example
//!
//! ```rust
//! use lupton_core::Plane;
//! use lupton_ops::{make_lupton_rgb, LuptonParams};
//!
//! let params = LuptonParams {
//!     stretch: 0.5,
//!     q: 10.0,
//!     ..LuptonParams::default()
//! };
//! let frame = Plane::filled(3, 2, 1.0);
//! let rgb = make_lupton_rgb(&frame, None, None, &params, None).unwrap();
//! assert_eq!(rgb.shape(), (2, 3, 3));
//! ```

use crate::mapping::{AsinhMapping, Mapping};
use crate::resize::ResizeOptions;
use lupton_core::{Error, Plane, Resampler, Result, RgbImage8, Triple};
use tracing::debug;

/// Default black point.
pub const DEFAULT_MINIMUM: f64 = 0.0;

/// Default linear stretch.
pub const DEFAULT_STRETCH: f64 = 5.0;

/// Default asinh softening parameter.
pub const DEFAULT_Q: f64 = 8.0;

/// Parameters of [`make_lupton_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuptonParams {
    /// Intensity mapped to black, per channel.
    pub minimum: Triple,
    /// Linear stretch of the image.
    pub stretch: f64,
    /// Asinh softening parameter.
    pub q: f64,
    /// Width of the border drawn around saturated regions; 0 disables it.
    pub saturated_border_width: u32,
    /// Value written into saturated pixels when the border is enabled.
    pub saturated_pixel_value: Option<f64>,
    /// Output size request.
    pub size: ResizeOptions,
}

impl Default for LuptonParams {
    fn default() -> Self {
        Self {
            minimum: Triple::splat(DEFAULT_MINIMUM),
            stretch: DEFAULT_STRETCH,
            q: DEFAULT_Q,
            saturated_border_width: 0,
            saturated_pixel_value: None,
            size: ResizeOptions::default(),
        }
    }
}

/// Returns an 8-bit RGB image from up to three planes using an asinh stretch.
///
/// `g` and `b` default to `r`. Inputs may come from any numeric type via
/// [`Plane::from_samples`] and may span any range.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if a saturated border is requested without
///   a saturated pixel value, or for bad stretch / size parameters.
/// - [`Error::NotImplemented`] if a saturated border is requested: the
///   replacement of saturated pixels is not available.
/// - Any error of [`Mapping::make_rgb_image`].
pub fn make_lupton_rgb(
    r: &Plane,
    g: Option<&Plane>,
    b: Option<&Plane>,
    params: &LuptonParams,
    resampler: Option<&dyn Resampler>,
) -> Result<RgbImage8> {
    if params.saturated_border_width != 0 {
        if params.saturated_pixel_value.is_none() {
            return Err(Error::invalid_argument(
                "saturated_pixel_value must be set if saturated_border_width is set",
            ));
        }
        return Err(Error::not_implemented("replacement of saturated pixels"));
    }

    let g = g.unwrap_or(r);
    let b = b.unwrap_or(r);
    debug!(
        minimum = ?params.minimum,
        stretch = params.stretch,
        q = params.q,
        "make_lupton_rgb"
    );

    let mapping = AsinhMapping::new(params.minimum, params.stretch, params.q)?;
    mapping.make_rgb_image(Some(r), Some(g), Some(b), &params.size, resampler)
}
