//! Linear command
//!
//! Linear stretch; missing limits come from the data.

use crate::config::StretchConfig;
use crate::LinearArgs;
use anyhow::{Context, Result};
use lupton_ops::{compute_intensity, LinearMapping, Mapping};
use tracing::debug;

pub fn run(args: LinearArgs, config: &StretchConfig, verbose: u8) -> Result<()> {
    let bands = super::load_bands(&args.bands)?;
    let minimum = args.minimum.or(config.minimum());
    let maximum = args.maximum.or(config.maximum);

    // only needed when a limit has to be measured
    let image = match (minimum, maximum) {
        (Some(_), Some(_)) => None,
        _ => Some(compute_intensity(&bands.r, bands.g(), bands.b())?),
    };
    let mapping = LinearMapping::with_limits(minimum, maximum, image).context("Invalid linear limits")?;
    debug!(minimum = ?mapping.minimum(), maximum = mapping.maximum(), "linear");

    let resampler = super::resampler(&args.size);
    let size = super::resize_options(&args.size);
    let rgb = mapping
        .make_rgb_image(Some(&bands.r), bands.g(), bands.b(), &size, Some(&resampler))
        .context("Linear composition failed")?;

    super::save_rgb(&args.bands.output, &rgb)?;
    super::report(verbose, &args.bands.output, &rgb);
    Ok(())
}
