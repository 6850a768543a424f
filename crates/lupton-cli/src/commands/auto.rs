//! Auto command
//!
//! Asinh stretch with black point and stretch estimated from the data.

use crate::config::{EstimatorKind, StretchConfig};
use crate::AutoArgs;
use anyhow::{Context, Result};
use lupton_ops::lupton::DEFAULT_Q;
use lupton_ops::{AsinhZScaleMapping, LimitEstimator, Mapping, MinMaxInterval, PercentileInterval};
use tracing::debug;

/// Default percentile clip.
const DEFAULT_LOWER: f64 = 0.5;
const DEFAULT_UPPER: f64 = 99.5;

/// Estimator from flags, then config, then min/max.
fn estimator(args: &AutoArgs, config: &StretchConfig) -> Result<Box<dyn LimitEstimator>> {
    let kind = args.estimator.or(config.estimator).unwrap_or_default();
    Ok(match kind {
        EstimatorKind::MinMax => Box::new(MinMaxInterval),
        EstimatorKind::Percentile => {
            let lower = args.lower.or(config.lower).unwrap_or(DEFAULT_LOWER);
            let upper = args.upper.or(config.upper).unwrap_or(DEFAULT_UPPER);
            Box::new(PercentileInterval::new(lower, upper).context("Invalid percentiles")?)
        }
    })
}

pub fn run(args: AutoArgs, config: &StretchConfig, verbose: u8) -> Result<()> {
    let bands = super::load_bands(&args.bands)?;
    let q = args.q.or(config.q).unwrap_or(DEFAULT_Q);
    let pedestal = args.pedestal.or(config.pedestal());
    let estimator = estimator(&args, config)?;

    let mapping = AsinhZScaleMapping::new(&bands.r, bands.g(), bands.b(), q, pedestal, &*estimator)
        .context("Limit estimation failed")?;
    debug!(minimum = ?mapping.minimum(), stretch = mapping.stretch(), q, "auto");

    let resampler = super::resampler(&args.size);
    let size = super::resize_options(&args.size);
    let rgb = mapping
        .make_rgb_image(Some(&bands.r), bands.g(), bands.b(), &size, Some(&resampler))
        .context("Auto composition failed")?;

    super::save_rgb(&args.bands.output, &rgb)?;
    super::report(verbose, &args.bands.output, &rgb);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;
    use lupton_core::Plane;

    fn parse(argv: &[&str]) -> AutoArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Auto(args) => args,
            _ => panic!("expected auto"),
        }
    }

    fn ramp() -> Plane {
        Plane::from_vec(101, 1, (0..=100).map(|v| v as f64).collect()).unwrap()
    }

    #[test]
    fn default_estimator_is_min_max() {
        let est = estimator(&parse(&["lupton", "auto", "a.png", "-o", "o.png"]), &StretchConfig::default()).unwrap();
        assert_eq!(est.limits(&ramp()).unwrap(), (0.0, 100.0));
    }

    #[test]
    fn config_selects_percentile() {
        let config = StretchConfig::from_yaml_str("estimator: percentile\nlower: 10\nupper: 90\n").unwrap();
        let est = estimator(&parse(&["lupton", "auto", "a.png", "-o", "o.png"]), &config).unwrap();
        assert_eq!(est.limits(&ramp()).unwrap(), (10.0, 90.0));

        let est = estimator(&parse(&["lupton", "auto", "a.png", "-o", "o.png", "--upper", "80"]), &config).unwrap();
        assert_eq!(est.limits(&ramp()).unwrap(), (10.0, 80.0));
    }

    #[test]
    fn bad_percentiles_rejected() {
        let args = parse(&["lupton", "auto", "a.png", "-o", "o.png", "-e", "percentile", "--lower", "60", "--upper", "40"]);
        assert!(estimator(&args, &StretchConfig::default()).is_err());
    }
}
