//! Output size requests.
//!
//! A composition may ask for an explicit width and/or height, or for a
//! scale factor relative to the input, but never both. When only one
//! dimension is given the other follows the input aspect ratio.
//!
//! # Example
//!
//! ```rust
//! use lupton_ops::ResizeOptions;
//!
//! // 100x50 input, ask for 40 columns: rows follow the aspect ratio
//! let size = ResizeOptions::width(40).resolve(50, 100).unwrap();
//! assert_eq!(size, Some((40, 20)));
//! ```

use lupton_core::{Error, Result};

/// Requested output size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeOptions {
    /// Desired output width.
    pub x_size: Option<usize>,
    /// Desired output height.
    pub y_size: Option<usize>,
    /// Output size as a fraction of the input size.
    pub rescale: Option<f64>,
}

impl ResizeOptions {
    /// No resize.
    pub fn none() -> Self {
        Self::default()
    }

    /// Explicit width, height from the aspect ratio.
    pub fn width(x_size: usize) -> Self {
        Self {
            x_size: Some(x_size),
            ..Self::default()
        }
    }

    /// Explicit height, width from the aspect ratio.
    pub fn height(y_size: usize) -> Self {
        Self {
            y_size: Some(y_size),
            ..Self::default()
        }
    }

    /// Explicit width and height.
    pub fn size(x_size: usize, y_size: usize) -> Self {
        Self {
            x_size: Some(x_size),
            y_size: Some(y_size),
            rescale: None,
        }
    }

    /// Scale both dimensions by `factor`.
    pub fn rescale(factor: f64) -> Self {
        Self {
            rescale: Some(factor),
            ..Self::default()
        }
    }

    /// Resolves the request against an input of `height` x `width`.
    ///
    /// Returns `Ok(None)` when no resize was requested, otherwise the target
    /// `(width, height)`. A missing dimension is derived as
    /// `trunc(given * other / this + 0.5)`; a rescale factor truncates.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a size and a rescale are both given.
    /// - [`Error::InvalidDimensions`] for a zero target or a non-positive factor.
    pub fn resolve(&self, height: usize, width: usize) -> Result<Option<(usize, usize)>> {
        let (w, h) = match (self.x_size, self.y_size, self.rescale) {
            (None, None, None) => return Ok(None),
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
                return Err(Error::invalid_argument("you may not specify a size and rescale"));
            }
            (Some(x), Some(y), None) => (x, y),
            (Some(x), None, None) => {
                if width == 0 {
                    return Err(Error::invalid_dimensions(width, height, "cannot derive height from zero width"));
                }
                (x, (x as f64 * height as f64 / width as f64 + 0.5) as usize)
            }
            (None, Some(y), None) => {
                if height == 0 {
                    return Err(Error::invalid_dimensions(width, height, "cannot derive width from zero height"));
                }
                ((y as f64 * width as f64 / height as f64 + 0.5) as usize, y)
            }
            (None, None, Some(factor)) => {
                if !(factor.is_finite() && factor > 0.0) {
                    return Err(Error::invalid_dimensions(
                        width,
                        height,
                        format!("rescale factor must be positive, got {factor}"),
                    ));
                }
                ((width as f64 * factor) as usize, (height as f64 * factor) as usize)
            }
        };

        if w == 0 || h == 0 {
            return Err(Error::invalid_dimensions(w, h, "target size must be > 0"));
        }
        Ok(Some((w, h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_requested() {
        assert_eq!(ResizeOptions::none().resolve(10, 10).unwrap(), None);
    }

    #[test]
    fn test_aspect_ratio_rounding() {
        // 3 rows x 4 cols, x=10 -> 10*3/4 + 0.5 = 8.0
        assert_eq!(ResizeOptions::width(10).resolve(3, 4).unwrap(), Some((10, 8)));
        // 3 rows x 4 cols, y=5 -> 5*4/3 + 0.5 = 7.17
        assert_eq!(ResizeOptions::height(5).resolve(3, 4).unwrap(), Some((7, 5)));
    }

    #[test]
    fn test_explicit_size() {
        assert_eq!(ResizeOptions::size(7, 9).resolve(100, 100).unwrap(), Some((7, 9)));
    }

    #[test]
    fn test_rescale_truncates() {
        assert_eq!(ResizeOptions::rescale(0.5).resolve(5, 9).unwrap(), Some((4, 2)));
        assert_eq!(ResizeOptions::rescale(2.0).resolve(5, 9).unwrap(), Some((18, 10)));
    }

    #[test]
    fn test_size_and_rescale_conflict() {
        let opts = ResizeOptions {
            x_size: Some(10),
            y_size: None,
            rescale: Some(2.0),
        };
        let err = opts.resolve(10, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let opts = ResizeOptions {
            x_size: None,
            y_size: Some(10),
            rescale: Some(2.0),
        };
        assert!(opts.resolve(10, 10).is_err());
    }

    #[test]
    fn test_degenerate_targets() {
        assert!(ResizeOptions::rescale(0.0).resolve(10, 10).is_err());
        assert!(ResizeOptions::rescale(f64::NAN).resolve(10, 10).is_err());
        assert!(ResizeOptions::rescale(0.01).resolve(10, 10).is_err());
        assert!(ResizeOptions::width(0).resolve(10, 10).is_err());
    }
}
