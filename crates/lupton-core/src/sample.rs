//! Numeric sample types accepted as image input.
//!
//! Astronomical frames arrive as raw counts (`u16`, `i32`) or calibrated
//! floats. Unlike display pixel formats, samples are never normalised: a
//! `u16` count of 1200 becomes `1200.0`, because black points and stretches
//! are expressed in the data's own units. Values are held as `f64` so
//! counts above `2^24` and faint signal on a high sky level survive.

/// A numeric element type that can be loaded into a [`Plane`](crate::Plane).
pub trait Sample: Copy + Send + Sync + 'static {
    /// Converts the sample value verbatim to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, i8, i16, i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_not_normalised() {
        assert_eq!(255u8.to_f64(), 255.0);
        assert_eq!(1200u16.to_f64(), 1200.0);
        assert_eq!((-40i32).to_f64(), -40.0);
    }

    #[test]
    fn large_counts_stay_exact() {
        assert_eq!(16_777_217i64.to_f64(), 16_777_217.0);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
    }

    #[test]
    fn floats_pass_through() {
        assert_eq!(0.25f64.to_f64(), 0.25);
        assert!(f32::NAN.to_f64().is_nan());
    }
}
