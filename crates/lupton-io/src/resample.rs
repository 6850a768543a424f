//! Plane resampling through `image::imageops`.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use lupton_core::{Error, Plane, Resampler, Result};
use tracing::trace;

/// [`Resampler`] backed by [`imageops::resize`].
///
/// The `image` crate filters `f32` pixels and clamps them to `[0, 1]`, so
/// planes are normalised to their finite range around the resize and
/// non-finite samples are resampled as the range minimum.
///
/// # Example
///
/// ```rust
/// use lupton_core::{Plane, Resampler};
/// use lupton_io::ImageResampler;
///
/// let plane = Plane::filled(8, 4, 1500.0);
/// let half = ImageResampler::default().resample(&plane, 4, 2).unwrap();
/// assert_eq!(half.shape(), (2, 4));
/// assert!((half.get(0, 0) - 1500.0).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImageResampler {
    filter: FilterType,
}

impl ImageResampler {
    /// Resampler with the given filter.
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Filter in use.
    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl Default for ImageResampler {
    /// Bilinear filtering.
    fn default() -> Self {
        Self::new(FilterType::Triangle)
    }
}

fn to_u32(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::invalid_dimensions(width, height, "exceeds u32")),
    }
}

impl Resampler for ImageResampler {
    fn resample(&self, plane: &Plane, width: usize, height: usize) -> Result<Plane> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "empty output"));
        }
        let Some((lo, hi)) = plane.min_max() else {
            return Ok(Plane::filled(width, height, f64::NAN));
        };
        if lo == hi {
            return Ok(Plane::filled(width, height, lo));
        }

        let (src_w, src_h) = to_u32(plane.width(), plane.height())?;
        let (dst_w, dst_h) = to_u32(width, height)?;
        let span = hi - lo;
        trace!(src_w, src_h, dst_w, dst_h, lo, hi, filter = ?self.filter, "resample");

        let unit: Vec<f32> = plane
            .as_slice()
            .iter()
            .map(|&v| if v.is_finite() { ((v - lo) / span) as f32 } else { 0.0 })
            .collect();
        let src: ImageBuffer<Luma<f32>, Vec<f32>> = ImageBuffer::from_raw(src_w, src_h, unit)
            .ok_or_else(|| Error::invalid_dimensions(plane.width(), plane.height(), "buffer too small"))?;

        let out = imageops::resize(&src, dst_w, dst_h, self.filter);
        let data = out.into_raw().into_iter().map(|v| v as f64 * span + lo).collect();
        Plane::from_vec(width, height, data)
    }
}
