//! Error types for lupton operations.
//!
//! All failures are deterministic: they come from bad arguments or a missing
//! collaborator, never from transient conditions, so nothing here is worth
//! retrying.
//!
//! # Categories
//!
//! - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument),
//!   [`DimensionMismatch`](Error::DimensionMismatch),
//!   [`InvalidDimensions`](Error::InvalidDimensions)
//! - **Precondition errors**: [`Precondition`](Error::Precondition)
//! - **Unsupported features**: [`NotImplemented`](Error::NotImplemented)
//!
//! Numeric edge cases (zero intensity, channels going negative after scaling)
//! are not errors; the mapping defines them as black.
//!
//! # Usage
//!
//! ```rust
//! use lupton_core::{Error, Result};
//!
//! fn check_bands(n: usize) -> Result<()> {
//!     if n != 1 && n != 3 {
//!         return Err(Error::invalid_argument("please provide 1 or 3 values"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_bands(2).unwrap_err().is_argument_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping images to RGB.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter has an invalid value or an invalid combination was given.
    ///
    /// Covers partial channel sets (green without blue), per-channel values of
    /// the wrong length, a degenerate linear range and conflicting resize
    /// requests.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two planes that must share a shape do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First plane width
        a_width: usize,
        /// First plane height
        a_height: usize,
        /// Second plane width
        b_width: usize,
        /// Second plane height
        b_height: usize,
    },

    /// Dimensions are zero or do not match the supplied buffer.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// The operation cannot run in the current state.
    ///
    /// Returned when a resize is requested without a resampler, or when an
    /// RGB image is requested with no input image and no reference image.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The requested feature exists as an option but has no implementation.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::DimensionMismatch`] error from `(width, height)` pairs.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Precondition`] error.
    #[inline]
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Creates an [`Error::NotImplemented`] error.
    #[inline]
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if the caller passed bad arguments.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::DimensionMismatch { .. } | Self::InvalidDimensions { .. }
        )
    }

    /// Returns `true` if a precondition (collaborator, reference image) was missing.
    #[inline]
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Returns `true` if the request hit an unimplemented feature.
    #[inline]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 50), (200, 80));
        let msg = err.to_string();
        assert!(msg.contains("100x50"));
        assert!(msg.contains("200x80"));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_categories() {
        assert!(Error::invalid_argument("x").is_argument_error());
        assert!(Error::invalid_dimensions(0, 3, "zero width").is_argument_error());
        assert!(Error::precondition("no resampler").is_precondition_error());
        assert!(!Error::precondition("no resampler").is_argument_error());
        assert!(Error::not_implemented("border").is_not_implemented());
        assert!(!Error::other("misc").is_argument_error());
    }

    #[test]
    fn test_messages() {
        let err = Error::invalid_dimensions(0, 4, "zero width");
        assert_eq!(err.to_string(), "invalid dimensions: 0x4 (zero width)");
        let err = Error::not_implemented("saturated border replacement");
        assert!(err.to_string().contains("saturated border"));
    }
}
