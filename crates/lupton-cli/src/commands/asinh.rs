//! Asinh command
//!
//! Lupton et al. (2004) asinh composition with explicit parameters.

use crate::config::StretchConfig;
use crate::AsinhArgs;
use anyhow::{Context, Result};
use lupton_ops::lupton::{DEFAULT_MINIMUM, DEFAULT_Q, DEFAULT_STRETCH};
use lupton_ops::{make_lupton_rgb, LuptonParams};
use lupton_core::Triple;
use tracing::debug;

/// Parameters from flags, then config, then built-in defaults.
fn params(args: &AsinhArgs, config: &StretchConfig) -> LuptonParams {
    LuptonParams {
        minimum: args
            .minimum
            .or(config.minimum())
            .unwrap_or(Triple::splat(DEFAULT_MINIMUM)),
        stretch: args.stretch.or(config.stretch).unwrap_or(DEFAULT_STRETCH),
        q: args.q.or(config.q).unwrap_or(DEFAULT_Q),
        saturated_border_width: args.saturated_border_width,
        saturated_pixel_value: args.saturated_pixel_value,
        size: super::resize_options(&args.size),
    }
}

pub fn run(args: AsinhArgs, config: &StretchConfig, verbose: u8) -> Result<()> {
    let bands = super::load_bands(&args.bands)?;
    let params = params(&args, config);
    debug!(?params, "asinh");

    let resampler = super::resampler(&args.size);
    let rgb = make_lupton_rgb(&bands.r, bands.g(), bands.b(), &params, Some(&resampler))
        .context("Asinh composition failed")?;

    super::save_rgb(&args.bands.output, &rgb)?;
    super::report(verbose, &args.bands.output, &rgb);
    Ok(())
}
