//! Intensity mapping of R, G, B planes into 8-bit colour.
//!
//! A [`Mapping`] turns the per-pixel total intensity into a multiplicative
//! factor. Multiplying every channel of a pixel by the same factor keeps
//! the pixel's colour while the intensity is stretched. Variants differ
//! only in that factor:
//!
//! - [`LinearMapping`] - straight line from black to white
//! - [`AsinhMapping`] - `asinh(Q * I / stretch) / Q`
//! - [`AsinhZScaleMapping`] - asinh with black point and stretch estimated
//!   from the data
//!
//! # Pipeline
//!
//! ```text
//! r, g, b ──> subtract minimum ──> intensity ──> factor
//!                      │                            │
//!                      └──────── multiply ◄─────────┘
//!                                   │
//!                     clamp < 0, colour-preserving clip ──> RgbImage8
//! ```

mod asinh;
mod asinh_zscale;
mod linear;

pub use asinh::AsinhMapping;
pub use asinh_zscale::AsinhZScaleMapping;
pub use linear::LinearMapping;

use crate::intensity::compute_intensity;
use crate::resize::ResizeOptions;
use lupton_core::{Error, Plane, Resampler, Result, RgbImage8, Triple};
use std::borrow::Cow;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest value of the output channel type.
pub const UINT8_MAX: f64 = u8::MAX as f64;

/// Maps red, green and blue intensities into `u8` values.
pub trait Mapping {
    /// Intensity mapped to black, per channel.
    fn minimum(&self) -> Triple;

    /// Factor that, multiplied into a pixel whose minimum-subtracted
    /// intensity is `intensity`, maps it into `[0, 255]`.
    ///
    /// The result is not clipped; saturation is handled afterwards.
    fn map_intensity(&self, intensity: f64) -> f64;

    /// Image the mapping was derived from, used when no image is passed to
    /// [`make_rgb_image`](Mapping::make_rgb_image).
    fn reference_image(&self) -> Option<&Plane> {
        None
    }

    /// Total intensity of the planes. Naive `(r + g + b) / 3` by default.
    fn intensity(&self, r: &Plane, g: Option<&Plane>, b: Option<&Plane>) -> Result<Plane> {
        compute_intensity(r, g, b)
    }

    /// Applies [`map_intensity`](Mapping::map_intensity) to a whole
    /// minimum-subtracted intensity plane.
    fn map_intensity_to_uint8(&self, intensity: &Plane) -> Plane {
        intensity.map(|i| self.map_intensity(i))
    }

    /// Converts three same-shaped planes into an 8-bit RGB image.
    ///
    /// Inputs are copied before the minimum is subtracted; the caller's
    /// planes are never modified.
    fn to_rgb_bytes(&self, r: &Plane, g: &Plane, b: &Plane) -> Result<RgbImage8> {
        r.ensure_same_shape(g)?;
        r.ensure_same_shape(b)?;

        let min = self.minimum();
        let r = r.offset(min[0]);
        let g = g.offset(min[1]);
        let b = b.offset(min[2]);

        let factor = self.map_intensity_to_uint8(&self.intensity(&r, Some(&g), Some(&b))?);
        trace!(width = r.width(), height = r.height(), "composing rgb");

        let channels = [r.as_slice(), g.as_slice(), b.as_slice()];
        let width = r.width();
        let mut data = vec![0u8; r.len() * 3];
        if width > 0 {
            compose_rows(&mut data, width, channels, factor.as_slice());
        }
        RgbImage8::from_raw(width, r.height(), data)
    }

    /// Converts up to three planes into an 8-bit RGB image.
    ///
    /// `r` defaults to the [reference image](Mapping::reference_image);
    /// `g` and `b` default to `r`. When `size` requests a resize, every
    /// plane is resampled with `resampler` before mapping.
    ///
    /// # Errors
    ///
    /// - [`Error::Precondition`] if `r` is absent and there is no reference
    ///   image, or if a resize is requested without a resampler.
    /// - [`Error::DimensionMismatch`] if the planes differ in shape.
    /// - Any error from [`ResizeOptions::resolve`].
    fn make_rgb_image(
        &self,
        r: Option<&Plane>,
        g: Option<&Plane>,
        b: Option<&Plane>,
        size: &ResizeOptions,
        resampler: Option<&dyn Resampler>,
    ) -> Result<RgbImage8> {
        let r = match r.or_else(|| self.reference_image()) {
            Some(r) => r,
            None => {
                return Err(Error::precondition(
                    "you must provide an image or construct the mapping from one",
                ));
            }
        };
        let g = g.unwrap_or(r);
        let b = b.unwrap_or(r);
        r.ensure_same_shape(g)?;
        r.ensure_same_shape(b)?;

        let (r, g, b): (Cow<Plane>, Cow<Plane>, Cow<Plane>) = match size.resolve(r.height(), r.width())? {
            None => (Cow::Borrowed(r), Cow::Borrowed(g), Cow::Borrowed(b)),
            Some((w, h)) => {
                let resampler = resampler
                    .ok_or_else(|| Error::precondition("unable to resize: no resampler available"))?;
                debug!(from_w = r.width(), from_h = r.height(), to_w = w, to_h = h, "resampling planes");
                (
                    Cow::Owned(resampler.resample(r, w, h)?),
                    Cow::Owned(resampler.resample(g, w, h)?),
                    Cow::Owned(resampler.resample(b, w, h)?),
                )
            }
        };

        self.to_rgb_bytes(&r, &g, &b)
    }
}

/// Multiplies, clamps and clips every row into interleaved RGB bytes.
#[cfg(feature = "parallel")]
fn compose_rows(dst: &mut [u8], width: usize, channels: [&[f64]; 3], factor: &[f64]) {
    dst.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| compose_row(row, y * width, channels, factor));
}

/// Multiplies, clamps and clips every row into interleaved RGB bytes.
#[cfg(not(feature = "parallel"))]
fn compose_rows(dst: &mut [u8], width: usize, channels: [&[f64]; 3], factor: &[f64]) {
    dst.chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| compose_row(row, y * width, channels, factor));
}

fn compose_row(row: &mut [u8], start: usize, channels: [&[f64]; 3], factor: &[f64]) {
    for (x, out) in row.chunks_exact_mut(3).enumerate() {
        let i = start + x;
        let fac = factor[i];
        let rgb = [
            channels[0][i] * fac,
            channels[1][i] * fac,
            channels[2][i] * fac,
        ];
        out.copy_from_slice(&clip_preserving_colour(rgb));
    }
}

/// Clips a scaled triplet to `u8` without shifting its colour.
///
/// Negative channels become 0 (one band can be below its black point while
/// the total intensity is not). If the brightest channel reaches 255, all
/// three are scaled by `255 / max` before truncation, so their ratios
/// survive.
///
/// ```rust
/// use lupton_ops::mapping::clip_preserving_colour;
///
/// assert_eq!(clip_preserving_colour([510.0, 255.0, -3.0]), [255, 127, 0]);
/// assert_eq!(clip_preserving_colour([100.9, 20.0, 0.0]), [100, 20, 0]);
/// ```
#[inline]
pub fn clip_preserving_colour(rgb: [f64; 3]) -> [u8; 3] {
    // f64::max drops NaN, so NaN channels land on 0 here too
    let c = rgb.map(|v| v.max(0.0));
    let peak = c[0].max(c[1]).max(c[2]);
    let c = if peak >= UINT8_MAX {
        c.map(|v| v * UINT8_MAX / peak)
    } else {
        c
    };
    // `as u8` truncates and saturates; the min guards the boundary
    c.map(|v| v.min(UINT8_MAX) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Factor 1 everywhere: exposes the clip on raw values.
    struct Unit;

    impl Mapping for Unit {
        fn minimum(&self) -> Triple {
            Triple::splat(0.0)
        }

        fn map_intensity(&self, _intensity: f64) -> f64 {
            1.0
        }
    }

    #[test]
    fn clip_keeps_ratios() {
        let out = clip_preserving_colour([1000.0, 500.0, 250.0]);
        assert_eq!(out, [255, 127, 63]);
    }

    #[test]
    fn clip_below_saturation_truncates() {
        assert_eq!(clip_preserving_colour([254.99, 1.5, 0.2]), [254, 1, 0]);
    }

    #[test]
    fn clip_exact_saturation() {
        assert_eq!(clip_preserving_colour([255.0, 255.0, 255.0]), [255, 255, 255]);
    }

    #[test]
    fn clip_negative_and_nan() {
        assert_eq!(clip_preserving_colour([-10.0, f64::NAN, 30.0]), [0, 0, 30]);
    }

    #[test]
    fn to_rgb_bytes_does_not_touch_inputs() {
        let r = Plane::filled(2, 2, 300.0);
        let g = Plane::filled(2, 2, 150.0);
        let b = Plane::filled(2, 2, 0.0);
        let before = r.clone();
        let img = Unit.to_rgb_bytes(&r, &g, &b).unwrap();
        assert_eq!(r, before);
        assert_eq!(img.pixel(0, 0), [255, 127, 0]);
    }

    #[test]
    fn make_rgb_image_needs_an_image() {
        let err = Unit
            .make_rgb_image(None, None, None, &ResizeOptions::none(), None)
            .unwrap_err();
        assert!(err.is_precondition_error());
    }

    #[test]
    fn make_rgb_image_needs_a_resampler_to_resize() {
        let r = Plane::filled(4, 4, 1.0);
        let err = Unit
            .make_rgb_image(Some(&r), None, None, &ResizeOptions::width(2), None)
            .unwrap_err();
        assert!(err.is_precondition_error());
    }

    #[test]
    fn make_rgb_image_rejects_mismatched_planes() {
        let r = Plane::new(4, 4);
        let g = Plane::new(4, 3);
        let err = Unit
            .make_rgb_image(Some(&r), Some(&g), None, &ResizeOptions::none(), None)
            .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn empty_planes_compose_to_empty_image() {
        let p = Plane::new(0, 0);
        let img = Unit.to_rgb_bytes(&p, &p, &p).unwrap();
        assert_eq!(img.shape(), (0, 0, 3));
    }
}
