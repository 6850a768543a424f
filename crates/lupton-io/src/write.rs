//! RGB output.

use crate::error::{IoError, IoResult};
use image::{ExtendedColorType, ImageFormat};
use lupton_core::RgbImage8;
use std::path::Path;
use tracing::debug;

/// Writes an 8-bit RGB image, choosing the encoder from the file extension.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the extension names no known format.
/// - [`IoError::DimensionMismatch`] if the image is too large for the encoder.
/// - [`IoError::Io`] / [`IoError::Codec`] if encoding or writing fails.
pub fn write_rgb<P: AsRef<Path>>(path: P, image: &RgbImage8) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| IoError::UnsupportedFormat(path.display().to_string()))?;

    let (width, height) = match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::DimensionMismatch {
                expected: format!("at most {}x{}", u32::MAX, u32::MAX),
                actual: format!("{}x{}", image.width(), image.height()),
            });
        }
    };

    debug!(path = %path.display(), width, height, ?format, "write rgb");
    match image::save_buffer_with_format(path, image.as_raw(), width, height, ExtendedColorType::Rgb8, format) {
        Ok(()) => Ok(()),
        Err(image::ImageError::IoError(e)) => Err(IoError::Io(e)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension() {
        let err = write_rgb("out.nope", &RgbImage8::new(1, 1)).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_extension() {
        let err = write_rgb("out", &RgbImage8::new(1, 1)).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }
}
