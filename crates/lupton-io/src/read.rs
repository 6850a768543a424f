//! Band loading.

use crate::error::{IoError, IoResult};
use image::DynamicImage;
use lupton_core::Plane;
use std::path::Path;
use tracing::debug;

/// Reads one band from an image file.
///
/// Single-channel 8 and 16-bit images keep their raw sample values.
/// Anything else is reduced to luma through the float conversion of the
/// `image` crate, which keeps float data unscaled and maps integer data
/// to `[0, 1]`.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened.
/// - [`IoError::Codec`] if it cannot be decoded.
pub fn read_plane<P: AsRef<Path>>(path: P) -> IoResult<Plane> {
    let path = path.as_ref();
    let img = match image::open(path) {
        Ok(img) => img,
        Err(image::ImageError::IoError(e)) => return Err(IoError::Io(e)),
        Err(e) => return Err(e.into()),
    };

    let (width, height) = (img.width() as usize, img.height() as usize);
    debug!(path = %path.display(), width, height, color = ?img.color(), "read plane");

    let plane = match img {
        DynamicImage::ImageLuma8(buf) => Plane::from_samples(width, height, buf.as_raw())?,
        DynamicImage::ImageLuma16(buf) => Plane::from_samples(width, height, buf.as_raw())?,
        other => Plane::from_samples(width, height, other.to_luma32f().as_raw())?,
    };
    Ok(plane)
}
