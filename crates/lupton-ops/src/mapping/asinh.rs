//! Asinh stretch.
//!
//! ```text
//! x = asinh(Q * (I - minimum) / stretch) / Q
//! ```
//!
//! Near black the curve is linear with gradient set at `0.1 * stretch`;
//! bright regions are compressed logarithmically. As `Q -> 0` it tends to
//! a linear stretch. See Lupton et al. (2004), PASP 116, 133.

use super::{Mapping, UINT8_MAX};
use lupton_core::{Error, Result, Triple};
use tracing::debug;

/// `|Q|` below this is treated as zero (32-bit machine epsilon, `2^-23`).
pub const Q_EPSILON: f64 = f32::EPSILON as f64;

/// Q substituted when `|Q| < Q_EPSILON`.
pub const Q_FLOOR: f64 = 0.1;

/// Largest accepted Q.
pub const Q_MAX: f64 = 1e10;

/// Fraction of the stretch at which the low-intensity gradient is fixed.
const FRAC: f64 = 0.1;

/// Asinh stretch preserving colour independent of brightness.
///
/// # Example
///
/// ```rust
/// use lupton_core::Plane;
/// use lupton_ops::{AsinhMapping, Mapping, ResizeOptions};
///
/// let map = AsinhMapping::new(0.0, 5.0, 8.0).unwrap();
/// let img = Plane::filled(2, 2, 100.0);
/// let rgb = map.make_rgb_image(Some(&img), None, None, &ResizeOptions::none(), None).unwrap();
/// assert_eq!(rgb.pixel(1, 1), [200, 200, 200]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsinhMapping {
    minimum: Triple,
    q: f64,
    slope: f64,
    soften: f64,
}

impl AsinhMapping {
    /// Asinh stretch from `minimum` to `minimum + stretch`, softened by `q`.
    ///
    /// `q` with magnitude below [`Q_EPSILON`] is replaced by [`Q_FLOOR`];
    /// `q` above [`Q_MAX`] is clamped to it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `stretch` is zero or not finite, or `q`
    /// is NaN.
    pub fn new(minimum: impl Into<Triple>, stretch: f64, q: f64) -> Result<Self> {
        if stretch == 0.0 || !stretch.is_finite() {
            return Err(Error::invalid_argument(format!(
                "stretch must be finite and non-zero, got {stretch}"
            )));
        }
        if q.is_nan() {
            return Err(Error::invalid_argument("Q must not be NaN"));
        }

        let q = clamp_q(q);
        let slope = FRAC * UINT8_MAX / (FRAC * q).asinh();
        let soften = q / stretch;
        let minimum = minimum.into();
        debug!(?minimum, stretch, q, slope, soften, "asinh mapping");

        Ok(Self {
            minimum,
            q,
            slope,
            soften,
        })
    }

    /// Softening parameter after clamping.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Output gradient scale, `0.1 * 255 / asinh(0.1 * Q)`.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// `Q / stretch`.
    pub fn soften(&self) -> f64 {
        self.soften
    }
}

/// Applies the Q floor and ceiling.
fn clamp_q(q: f64) -> f64 {
    if q.abs() < Q_EPSILON {
        Q_FLOOR
    } else {
        q.min(Q_MAX)
    }
}

impl Mapping for AsinhMapping {
    fn minimum(&self) -> Triple {
        self.minimum
    }

    #[inline]
    fn map_intensity(&self, intensity: f64) -> f64 {
        if !(intensity > 0.0) {
            0.0
        } else {
            (intensity * self.soften).asinh() * self.slope / intensity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constants_follow_q_and_stretch() {
        let map = AsinhMapping::new(0.0, 5.0, 8.0).unwrap();
        assert_relative_eq!(map.soften(), 1.6);
        assert_relative_eq!(map.slope(), 25.5 / 0.8f64.asinh());
    }

    #[test]
    fn q_floor_and_ceiling() {
        assert_eq!(AsinhMapping::new(0.0, 1.0, 0.0).unwrap().q(), Q_FLOOR);
        assert_eq!(AsinhMapping::new(0.0, 1.0, 1e-9).unwrap().q(), Q_FLOOR);
        assert_eq!(AsinhMapping::new(0.0, 1.0, 1e12).unwrap().q(), Q_MAX);
        assert_relative_eq!(AsinhMapping::new(0.0, 1.0, 3.0).unwrap().q(), 3.0);
    }

    #[test]
    fn factor_at_known_intensity() {
        let map = AsinhMapping::new(0.0, 5.0, 8.0).unwrap();
        // asinh(160) * (25.5 / asinh(0.8)) / 100
        assert_relative_eq!(map.map_intensity(100.0), 2.0076266877790614, epsilon = 1e-12);
    }

    #[test]
    fn non_positive_intensity_is_black() {
        let map = AsinhMapping::new(0.0, 5.0, 8.0).unwrap();
        assert_eq!(map.map_intensity(0.0), 0.0);
        assert_eq!(map.map_intensity(-3.0), 0.0);
        assert_eq!(map.map_intensity(f64::NAN), 0.0);
    }

    #[test]
    fn rejects_bad_stretch() {
        assert!(AsinhMapping::new(0.0, 0.0, 8.0).unwrap_err().is_argument_error());
        assert!(AsinhMapping::new(0.0, f64::INFINITY, 8.0).is_err());
        assert!(AsinhMapping::new(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn small_q_approaches_linear_gradient() {
        let map = AsinhMapping::new(0.0, 5.0, 0.0).unwrap();
        // linear stretch over [0, 5] has factor 255 / 5
        assert_relative_eq!(map.map_intensity(1.0), 51.0, max_relative = 1e-3);
    }
}
