//! Naive total intensity.

use lupton_core::{Error, Plane, Result};

/// Returns the naive total intensity of the red, green and blue planes.
///
/// With green and blue given the result is `(r + g + b) / 3` per pixel.
/// With neither given, `r` is already the total intensity and is returned
/// as a copy.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if exactly one of `g` / `b` is given.
/// - [`Error::DimensionMismatch`] if the planes differ in shape.
///
/// # Example
///
/// ```rust
/// use lupton_core::Plane;
/// use lupton_ops::compute_intensity;
///
/// let r = Plane::filled(2, 2, 3.0);
/// let g = Plane::filled(2, 2, 6.0);
/// let b = Plane::filled(2, 2, 9.0);
/// let i = compute_intensity(&r, Some(&g), Some(&b)).unwrap();
/// assert_eq!(i.as_slice(), &[6.0; 4]);
/// ```
pub fn compute_intensity(r: &Plane, g: Option<&Plane>, b: Option<&Plane>) -> Result<Plane> {
    match (g, b) {
        (None, None) => Ok(r.clone()),
        (Some(g), Some(b)) => {
            r.ensure_same_shape(g)?;
            r.ensure_same_shape(b)?;
            let data = r
                .as_slice()
                .iter()
                .zip(g.as_slice())
                .zip(b.as_slice())
                .map(|((&r, &g), &b)| (r + g + b) / 3.0)
                .collect();
            Plane::from_vec(r.width(), r.height(), data)
        }
        _ => Err(Error::invalid_argument(
            "please specify either a single image or red, green, and blue images",
        )),
    }
}
