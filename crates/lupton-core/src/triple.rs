//! Per-channel parameters.
//!
//! Black points and pedestals may be given once for all bands or once per
//! band. [`Triple`] always holds exactly three values, ordered red, green,
//! blue.

use crate::{Error, Result};
use std::ops::{Add, Index};

/// Three per-channel values (R, G, B).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triple(pub [f64; 3]);

impl Triple {
    /// Broadcasts a scalar to all three channels.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self([value; 3])
    }

    /// Builds a triple from a slice of 1 or 3 values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other length.
    ///
    /// ```rust
    /// use lupton_core::Triple;
    ///
    /// assert_eq!(Triple::from_slice(&[2.0]).unwrap(), Triple::splat(2.0));
    /// assert!(Triple::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [v] => Ok(Self::splat(v)),
            [r, g, b] => Ok(Self([r, g, b])),
            _ => Err(Error::invalid_argument(format!(
                "please provide 1 or 3 values, got {}",
                values.len()
            ))),
        }
    }

    /// The three values as an array.
    #[inline]
    pub fn values(&self) -> [f64; 3] {
        self.0
    }
}

impl From<f64> for Triple {
    fn from(value: f64) -> Self {
        Self::splat(value)
    }
}

impl From<[f64; 3]> for Triple {
    fn from(values: [f64; 3]) -> Self {
        Self(values)
    }
}

impl Index<usize> for Triple {
    type Output = f64;

    #[inline]
    fn index(&self, channel: usize) -> &f64 {
        &self.0[channel]
    }
}

impl Add for Triple {
    type Output = Triple;

    fn add(self, rhs: Triple) -> Triple {
        Triple([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scalar_broadcasts() {
        let t: Triple = 3.5.into();
        assert_eq!(t.values(), [3.5; 3]);
    }

    #[test]
    fn slice_lengths() {
        assert_eq!(Triple::from_slice(&[1.0, 2.0, 3.0]).unwrap()[2], 3.0);
        let err = Triple::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(err.is_argument_error());
        assert!(Triple::from_slice(&[]).is_err());
    }

    #[test]
    fn add_is_per_channel() {
        let t = Triple([1.0, 2.0, 3.0]) + Triple::splat(10.0);
        assert_eq!(t.values(), [11.0, 12.0, 13.0]);
    }

    #[test]
    fn add_keeps_small_offsets_on_large_levels() {
        let t = Triple::splat(1e6) + Triple([0.1, 0.2, 0.3]);
        assert_relative_eq!(t[0] - 1e6, 0.1, epsilon = 1e-9);
        assert_relative_eq!(t[2] - 1e6, 0.3, epsilon = 1e-9);
    }
}
