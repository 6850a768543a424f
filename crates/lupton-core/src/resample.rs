//! Resampling collaborator.
//!
//! Composition can optionally resize its inputs before mapping. The
//! interpolation itself lives outside this crate (see `lupton_io::ImageResampler`);
//! callers pass any implementation of [`Resampler`].

use crate::{Plane, Result};

/// Resizes a plane to a target width and height.
pub trait Resampler {
    /// Returns `plane` resampled to `width` x `height`.
    fn resample(&self, plane: &Plane, width: usize, height: usize) -> Result<Plane>;
}
