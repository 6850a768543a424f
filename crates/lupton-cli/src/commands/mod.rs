//! CLI command implementations

pub mod asinh;
pub mod auto;
pub mod linear;

use crate::{BandArgs, SizeArgs};
use anyhow::{bail, Context, Result};
use lupton_core::{Plane, RgbImage8};
use lupton_io::ImageResampler;
use lupton_ops::ResizeOptions;
use std::path::Path;
use tracing::info;

/// Red band plus optional green and blue bands.
pub struct Bands {
    pub r: Plane,
    pub g: Option<Plane>,
    pub b: Option<Plane>,
}

impl Bands {
    pub fn g(&self) -> Option<&Plane> {
        self.g.as_ref()
    }

    pub fn b(&self) -> Option<&Plane> {
        self.b.as_ref()
    }
}

/// Load a band from path
pub fn load_plane(path: &Path) -> Result<Plane> {
    lupton_io::read_plane(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load one or three bands
pub fn load_bands(args: &BandArgs) -> Result<Bands> {
    let bands = match args.inputs.as_slice() {
        [r] => Bands {
            r: load_plane(r)?,
            g: None,
            b: None,
        },
        [r, g, b] => Bands {
            r: load_plane(r)?,
            g: Some(load_plane(g)?),
            b: Some(load_plane(b)?),
        },
        other => bail!("Expected one or three input images, got {}", other.len()),
    };
    info!(width = bands.r.width(), height = bands.r.height(), count = args.inputs.len(), "loaded bands");
    Ok(bands)
}

/// Save image to path
pub fn save_rgb(path: &Path, image: &RgbImage8) -> Result<()> {
    lupton_io::write_rgb(path, image).with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), width = image.width(), height = image.height(), "wrote image");
    Ok(())
}

/// Output size request from the size flags
pub fn resize_options(args: &SizeArgs) -> ResizeOptions {
    ResizeOptions {
        x_size: args.width,
        y_size: args.height,
        rescale: args.rescale,
    }
}

/// Resampler for the size flags
pub fn resampler(args: &SizeArgs) -> ImageResampler {
    ImageResampler::new(args.filter.into())
}

/// Print a one-line summary on stdout
pub fn report(verbose: u8, output: &Path, image: &RgbImage8) {
    if verbose > 0 {
        println!("Wrote {} ({}x{})", output.display(), image.width(), image.height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn two_inputs_rejected() {
        let args = BandArgs {
            inputs: vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
            output: PathBuf::from("out.png"),
        };
        let err = load_bands(&args).err().unwrap();
        assert!(err.to_string().contains("one or three"));
    }

    #[test]
    fn size_flags_map_to_options() {
        let args = SizeArgs {
            width: Some(100),
            rescale: Some(0.5),
            ..SizeArgs::default()
        };
        let opts = resize_options(&args);
        assert_eq!(opts.x_size, Some(100));
        assert_eq!(opts.y_size, None);
        assert_eq!(opts.rescale, Some(0.5));
    }
}
