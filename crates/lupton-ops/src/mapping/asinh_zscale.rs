//! Asinh stretch with data-derived limits.

use super::{AsinhMapping, LinearMapping, Mapping};
use crate::intensity::compute_intensity;
use crate::limits::LimitEstimator;
use lupton_core::{Error, Plane, Result, Triple};
use std::borrow::Cow;
use tracing::debug;

/// Asinh stretch whose black point and linear stretch come from a limit
/// estimator (classically zscale):
///
/// ```text
/// x = asinh(Q * (I - z1) / (z2 - z1)) / Q
/// ```
///
/// A pedestal, when given, is removed from the images before estimating
/// `[z1, z2]` and added back into the per-channel minimum, never into the
/// stretch.
///
/// # Example
///
/// ```rust
/// use lupton_core::Plane;
/// use lupton_ops::{AsinhZScaleMapping, Mapping, MinMaxInterval};
///
/// let img = Plane::from_vec(4, 1, vec![10.0, 20.0, 30.0, 50.0]).unwrap();
/// let map = AsinhZScaleMapping::new(&img, None, None, 8.0, None, &MinMaxInterval).unwrap();
/// assert_eq!(map.minimum()[0], 10.0);
/// assert_eq!(map.stretch(), 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct AsinhZScaleMapping {
    asinh: AsinhMapping,
    stretch: f64,
    image: Plane,
}

impl AsinhZScaleMapping {
    /// Builds the mapping from one intensity image or three band images.
    ///
    /// Non-zero pedestal values are subtracted from copies of the matching
    /// images (a single image only uses the red pedestal); limits are then
    /// estimated on the combined intensity, which also becomes the
    /// [reference image](Mapping::reference_image).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if exactly one of `image2` / `image3` is
    ///   given, or the estimated limits are equal.
    /// - [`Error::DimensionMismatch`] if the images differ in shape.
    /// - Any error of the estimator or of [`AsinhMapping::new`].
    pub fn new(
        image1: &Plane,
        image2: Option<&Plane>,
        image3: Option<&Plane>,
        q: f64,
        pedestal: Option<Triple>,
        estimator: &dyn LimitEstimator,
    ) -> Result<Self> {
        let images: Vec<&Plane> = match (image2, image3) {
            (None, None) => vec![image1],
            (Some(g), Some(b)) => vec![image1, g, b],
            _ => {
                return Err(Error::invalid_argument(
                    "please specify either a single image or three images",
                ));
            }
        };

        let pedestal_values: Vec<f64> = match pedestal {
            Some(p) => p.values().to_vec(),
            None => vec![0.0; images.len()],
        };

        let images: Vec<Cow<Plane>> = images
            .into_iter()
            .zip(&pedestal_values)
            .map(|(img, &level)| {
                if level != 0.0 {
                    Cow::Owned(img.offset(level))
                } else {
                    Cow::Borrowed(img)
                }
            })
            .collect();

        let intensity = match images.as_slice() {
            [r, g, b] => compute_intensity(r, Some(&**g), Some(&**b))?,
            _ => Plane::clone(&images[0]),
        };

        let (z1, z2) = estimator.limits(&intensity)?;
        let limits = LinearMapping::with_limits(Some(Triple::splat(z1)), Some(z2), None)?;
        let stretch = limits.maximum() - limits.minimum()[0];

        let minimum = limits.minimum() + pedestal.unwrap_or_default();
        debug!(z1, z2, stretch, ?minimum, "estimated asinh limits");

        Ok(Self {
            asinh: AsinhMapping::new(minimum, stretch, q)?,
            stretch,
            image: intensity,
        })
    }

    /// Estimated linear stretch, `z2 - z1`.
    pub fn stretch(&self) -> f64 {
        self.stretch
    }
}

impl Mapping for AsinhZScaleMapping {
    fn minimum(&self) -> Triple {
        self.asinh.minimum()
    }

    fn reference_image(&self) -> Option<&Plane> {
        Some(&self.image)
    }

    #[inline]
    fn map_intensity(&self, intensity: f64) -> f64 {
        self.asinh.map_intensity(intensity)
    }
}
