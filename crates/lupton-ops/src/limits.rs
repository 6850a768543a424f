//! Display limit estimation.
//!
//! [`AsinhZScaleMapping`](crate::AsinhZScaleMapping) derives its black point
//! and linear stretch from a `(low, high)` pair estimated on the intensity
//! image. The estimator is a collaborator: any [`LimitEstimator`] works,
//! including closures, so a zscale implementation can be plugged in
//! unchanged.
//!
//! Two simple estimators ship with the crate:
//!
//! - [`MinMaxInterval`] - full finite range
//! - [`PercentileInterval`] - percentile clip, robust to hot pixels
//!
//! # Example
//!
//! ```rust
//! use lupton_core::Plane;
//! use lupton_ops::{LimitEstimator, PercentileInterval};
//!
//! let plane = Plane::from_vec(5, 1, vec![0.0, 1.0, 2.0, 3.0, 400.0]).unwrap();
//! let (lo, hi) = PercentileInterval::new(0.0, 75.0).unwrap().limits(&plane).unwrap();
//! assert_eq!((lo, hi), (0.0, 3.0));
//! ```

use lupton_core::{Error, Plane, Result};

/// Estimates `(low, high)` display limits from one intensity image.
pub trait LimitEstimator {
    /// Returns the `(low, high)` limits for `image`.
    fn limits(&self, image: &Plane) -> Result<(f64, f64)>;
}

impl<F> LimitEstimator for F
where
    F: Fn(&Plane) -> Result<(f64, f64)>,
{
    fn limits(&self, image: &Plane) -> Result<(f64, f64)> {
        self(image)
    }
}

/// Limits spanning the full finite range of the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxInterval;

impl LimitEstimator for MinMaxInterval {
    fn limits(&self, image: &Plane) -> Result<(f64, f64)> {
        image
            .min_max()
            .ok_or_else(|| Error::invalid_argument("image has no finite samples"))
    }
}

/// Limits at two percentiles of the finite samples.
///
/// Percentiles interpolate linearly between order statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileInterval {
    lower: f64,
    upper: f64,
}

impl PercentileInterval {
    /// Creates an interval clipping below `lower` and above `upper` percent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `0 <= lower < upper <= 100`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper {
            return Err(Error::invalid_argument(format!(
                "percentiles must satisfy 0 <= lower < upper <= 100, got {lower} and {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Keeps the central `percent` of the samples.
    pub fn symmetric(percent: f64) -> Result<Self> {
        let tail = (100.0 - percent) / 2.0;
        Self::new(tail, 100.0 - tail)
    }

    /// Lower percentile.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper percentile.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl LimitEstimator for PercentileInterval {
    fn limits(&self, image: &Plane) -> Result<(f64, f64)> {
        let mut values: Vec<f64> = image.as_slice().iter().copied().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return Err(Error::invalid_argument("image has no finite samples"));
        }
        values.sort_unstable_by(f64::total_cmp);
        Ok((percentile(&values, self.lower), percentile(&values, self.upper)))
    }
}

/// Percentile of sorted values, linear between neighbours.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let pos = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let t = pos - lo as f64;
    sorted[lo] * (1.0 - t) + sorted[hi] * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn minmax_ignores_nan() {
        let plane = Plane::from_vec(3, 1, vec![f64::NAN, -2.0, 7.0]).unwrap();
        assert_eq!(MinMaxInterval.limits(&plane).unwrap(), (-2.0, 7.0));
        assert!(MinMaxInterval.limits(&Plane::filled(1, 1, f64::NAN)).is_err());
    }

    #[test]
    fn percentile_interpolates() {
        let plane = Plane::from_vec(5, 1, vec![40.0, 10.0, 30.0, 0.0, 20.0]).unwrap();
        let (lo, hi) = PercentileInterval::new(10.0, 90.0).unwrap().limits(&plane).unwrap();
        assert_abs_diff_eq!(lo, 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(hi, 36.0, epsilon = 1e-5);
    }

    #[test]
    fn symmetric_tails() {
        let p = PercentileInterval::symmetric(99.0).unwrap();
        assert_abs_diff_eq!(p.lower(), 0.5);
        assert_abs_diff_eq!(p.upper(), 99.5);
    }

    #[test]
    fn invalid_percentiles() {
        assert!(PercentileInterval::new(50.0, 50.0).is_err());
        assert!(PercentileInterval::new(-1.0, 50.0).is_err());
        assert!(PercentileInterval::new(1.0, 101.0).is_err());
    }

    #[test]
    fn closures_are_estimators() {
        let fixed = |_: &Plane| -> Result<(f64, f64)> { Ok((1.0, 2.0)) };
        assert_eq!(fixed.limits(&Plane::new(1, 1)).unwrap(), (1.0, 2.0));
    }
}
