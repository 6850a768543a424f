//! Single-channel image plane.
//!
//! A [`Plane`] is one band of an astronomical image (for example the
//! i-band exposure that will become the red channel). Samples are stored
//! as `f64` in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [s00 s01 s02 ...]  <- Row 0
//!         [s10 s11 s12 ...]  <- Row 1
//! ```
//!
//! Shapes are reported `(height, width)`, matching the array convention of
//! the frames they are loaded from.
//!
//! # Usage
//!
//! ```rust
//! use lupton_core::Plane;
//!
//! let counts: Vec<u16> = vec![100, 200, 300, 400];
//! let plane = Plane::from_samples(2, 2, &counts).unwrap();
//! assert_eq!(plane.shape(), (2, 2));
//! assert_eq!(plane.get(1, 1), 400.0);
//! ```

use crate::{Error, Result, Sample};

/// Owned 2-D buffer of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl Plane {
    /// Creates a plane filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Creates a plane with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Creates a plane from existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Creates a plane from samples of any supported numeric type.
    ///
    /// Values are converted verbatim, without normalisation.
    pub fn from_samples<T: Sample>(width: usize, height: usize, samples: &[T]) -> Result<Self> {
        Self::from_vec(width, height, samples.iter().map(|s| s.to_f64()).collect())
    }

    /// Plane width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the plane holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y * self.width + x]
    }

    /// Row-major sample slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns `true` if both planes have the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &Plane) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Fails with [`Error::DimensionMismatch`] unless the shapes agree.
    pub fn ensure_same_shape(&self, other: &Plane) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(
                (self.width, self.height),
                (other.width, other.height),
            ))
        }
    }

    /// Minimum and maximum over finite samples.
    ///
    /// Returns `None` if the plane has no finite sample.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Returns a new plane with `f` applied to every sample.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Plane {
        Plane {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a copy with `value` subtracted from every sample.
    pub fn offset(&self, value: f64) -> Plane {
        self.map(|v| v - value)
    }
}
