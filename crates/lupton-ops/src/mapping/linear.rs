//! Linear stretch.

use super::{Mapping, UINT8_MAX};
use lupton_core::{Error, Plane, Result, Triple};
use tracing::debug;

/// Linear stretch from `minimum` (black) to `maximum` (white).
///
/// Expressed as a per-pixel factor on the minimum-subtracted intensity
/// `I`: `0` for `I <= 0`, `255 / range` inside the range and `255 / I`
/// above it, so saturated pixels keep their colour at full brightness.
///
/// # Example
///
/// ```rust
/// use lupton_core::Plane;
/// use lupton_ops::{LinearMapping, Mapping, ResizeOptions};
///
/// let map = LinearMapping::new(0.0, 100.0).unwrap();
/// let img = Plane::filled(2, 2, 50.0);
/// let rgb = map.make_rgb_image(Some(&img), None, None, &ResizeOptions::none(), None).unwrap();
/// assert_eq!(rgb.pixel(0, 0), [127, 127, 127]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearMapping {
    minimum: Triple,
    maximum: f64,
    range: f64,
    image: Option<Plane>,
}

impl LinearMapping {
    /// Linear stretch between explicit limits.
    pub fn new(minimum: impl Into<Triple>, maximum: f64) -> Result<Self> {
        Self::with_limits(Some(minimum.into()), Some(maximum), None)
    }

    /// Linear stretch with limits taken from `image` where not given.
    ///
    /// A missing `minimum` becomes the image's finite minimum, a missing
    /// `maximum` its finite maximum. The range is measured from the red
    /// black point. The image is kept as the default input of
    /// [`make_rgb_image`](Mapping::make_rgb_image).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a limit is missing and there is no
    /// image (or the image has no finite sample), or if `maximum` equals
    /// the minimum.
    pub fn with_limits(minimum: Option<Triple>, maximum: Option<f64>, image: Option<Plane>) -> Result<Self> {
        let (minimum, maximum) = match (minimum, maximum) {
            (Some(min), Some(max)) => (min, max),
            (min, max) => {
                let image = image.as_ref().ok_or_else(|| {
                    Error::invalid_argument("you must provide an image if you don't set both minimum and maximum")
                })?;
                let (lo, hi) = image
                    .min_max()
                    .ok_or_else(|| Error::invalid_argument("image has no finite samples"))?;
                (min.unwrap_or(Triple::splat(lo)), max.unwrap_or(hi))
            }
        };

        if maximum == minimum[0] {
            return Err(Error::invalid_argument("minimum and maximum values must not be equal"));
        }
        let range = maximum - minimum[0];
        debug!(?minimum, maximum, range, "linear mapping");

        Ok(Self {
            minimum,
            maximum,
            range,
            image,
        })
    }

    /// Intensity mapped to white.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// `maximum - minimum[red]`.
    pub fn range(&self) -> f64 {
        self.range
    }
}

impl Mapping for LinearMapping {
    fn minimum(&self) -> Triple {
        self.minimum
    }

    fn reference_image(&self) -> Option<&Plane> {
        self.image.as_ref()
    }

    #[inline]
    fn map_intensity(&self, intensity: f64) -> f64 {
        if !(intensity > 0.0) {
            0.0
        } else if intensity >= self.range {
            UINT8_MAX / intensity
        } else {
            UINT8_MAX / self.range
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factor_segments() {
        let map = LinearMapping::new(0.0, 10.0).unwrap();
        assert_eq!(map.map_intensity(-1.0), 0.0);
        assert_eq!(map.map_intensity(0.0), 0.0);
        assert_relative_eq!(map.map_intensity(5.0), 25.5);
        assert_relative_eq!(map.map_intensity(20.0), 12.75);
        assert_eq!(map.map_intensity(f64::NAN), 0.0);
    }

    #[test]
    fn limits_from_image() {
        let img = Plane::from_vec(3, 1, vec![2.0, 4.0, 12.0]).unwrap();
        let map = LinearMapping::with_limits(None, None, Some(img)).unwrap();
        assert_eq!(map.minimum(), Triple::splat(2.0));
        assert_eq!(map.maximum(), 12.0);
        assert_relative_eq!(map.range(), 10.0);
        assert!(map.reference_image().is_some());
    }

    #[test]
    fn partial_limits_from_image() {
        let img = Plane::from_vec(3, 1, vec![2.0, 4.0, 12.0]).unwrap();
        let map = LinearMapping::with_limits(Some(Triple::splat(0.0)), None, Some(img)).unwrap();
        assert_relative_eq!(map.range(), 12.0);
    }

    #[test]
    fn missing_limits_without_image() {
        let err = LinearMapping::with_limits(None, Some(1.0), None).unwrap_err();
        assert!(err.is_argument_error());
        assert!(LinearMapping::with_limits(None, None, None).is_err());
    }

    #[test]
    fn degenerate_range() {
        let err = LinearMapping::new(3.0, 3.0).unwrap_err();
        assert!(err.to_string().contains("must not be equal"));
        let flat = Plane::filled(2, 2, 7.0);
        assert!(LinearMapping::with_limits(None, None, Some(flat)).is_err());
    }

    #[test]
    fn per_channel_minimum() {
        let map = LinearMapping::new([1.0, 2.0, 3.0], 11.0).unwrap();
        assert_eq!(map.minimum()[2], 3.0);
        assert_relative_eq!(map.range(), 10.0);
    }
}
