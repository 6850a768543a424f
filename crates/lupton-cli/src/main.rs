//! lupton - colour composites of astronomical images
//!
//! Maps one or three bands to an 8-bit RGB image with the Lupton et al.
//! (2004) asinh stretch, a plain linear stretch, or an asinh stretch with
//! limits estimated from the data.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lupton_core::Triple;
use lupton_io::FilterType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::{EstimatorKind, StretchConfig};

#[derive(Parser)]
#[command(name = "lupton")]
#[command(author, version, about = "Asinh RGB composition of astronomical images")]
#[command(long_about = "
Builds colour composites from one or three image bands.

Examples:
  lupton asinh i.tif r.tif g.tif -o field.png          # Lupton asinh stretch
  lupton asinh i.tif r.tif g.tif -o field.png -Q 10 --stretch 0.5
  lupton asinh deep.tif -o grey.png --width 800        # single band, resized
  lupton linear i.tif r.tif g.tif -o lin.png --maximum 5000
  lupton auto i.tif r.tif g.tif -o auto.png --estimator percentile --upper 99.5
  lupton --config stretch.yaml asinh i.tif r.tif g.tif -o field.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// YAML file with default stretch parameters
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Asinh stretch with explicit black point, stretch and Q
    #[command(visible_alias = "a")]
    Asinh(AsinhArgs),

    /// Linear stretch between a black and a white point
    #[command(visible_alias = "l")]
    Linear(LinearArgs),

    /// Asinh stretch with limits estimated from the data
    Auto(AutoArgs),
}

/// Input bands and output file, shared by all commands.
#[derive(Args, Debug)]
struct BandArgs {
    /// Input band(s): one image, or red, green and blue images
    #[arg(required = true, num_args = 1..=3)]
    inputs: Vec<PathBuf>,

    /// Output image (format from extension)
    #[arg(short, long)]
    output: PathBuf,
}

/// Output size, shared by all commands.
#[derive(Args, Debug, Default)]
struct SizeArgs {
    /// Output width (height follows the aspect ratio unless given)
    #[arg(short, long)]
    width: Option<usize>,

    /// Output height (width follows the aspect ratio unless given)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Output size as a fraction of the input size
    #[arg(long)]
    rescale: Option<f64>,

    /// Resampling filter
    #[arg(short, long, value_enum, default_value = "bilinear")]
    filter: FilterArg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    Nearest,
    #[default]
    Bilinear,
    Bicubic,
    Gaussian,
    Lanczos,
}

impl From<FilterArg> for FilterType {
    fn from(f: FilterArg) -> Self {
        match f {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Bilinear => FilterType::Triangle,
            FilterArg::Bicubic => FilterType::CatmullRom,
            FilterArg::Gaussian => FilterType::Gaussian,
            FilterArg::Lanczos => FilterType::Lanczos3,
        }
    }
}

#[derive(Args, Debug)]
struct AsinhArgs {
    #[command(flatten)]
    bands: BandArgs,

    /// Black point: one value or three comma-separated values
    #[arg(short, long, value_parser = parse_triple)]
    minimum: Option<Triple>,

    /// Linear stretch of the image
    #[arg(short, long)]
    stretch: Option<f64>,

    /// Asinh softening parameter
    #[arg(short = 'Q', long = "q")]
    q: Option<f64>,

    /// Width of the border drawn around saturated regions
    #[arg(long, default_value = "0")]
    saturated_border_width: u32,

    /// Value written into saturated pixels
    #[arg(long)]
    saturated_pixel_value: Option<f64>,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct LinearArgs {
    #[command(flatten)]
    bands: BandArgs,

    /// Black point: one value or three comma-separated values (default: data minimum)
    #[arg(short, long, value_parser = parse_triple)]
    minimum: Option<Triple>,

    /// White point (default: data maximum)
    #[arg(short = 'M', long)]
    maximum: Option<f64>,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct AutoArgs {
    #[command(flatten)]
    bands: BandArgs,

    /// Asinh softening parameter
    #[arg(short = 'Q', long = "q")]
    q: Option<f64>,

    /// Sky level removed before estimating limits: one or three values
    #[arg(short, long, value_parser = parse_triple)]
    pedestal: Option<Triple>,

    /// Limit estimator
    #[arg(short, long, value_enum)]
    estimator: Option<EstimatorKind>,

    /// Lower percentile for the percentile estimator
    #[arg(long)]
    lower: Option<f64>,

    /// Upper percentile for the percentile estimator
    #[arg(long)]
    upper: Option<f64>,

    #[command(flatten)]
    size: SizeArgs,
}

/// Parses `v` or `r,g,b`.
fn parse_triple(s: &str) -> std::result::Result<Triple, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Triple::from_slice(&values).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = match &cli.config {
        Some(path) => StretchConfig::from_file(path)?,
        None => StretchConfig::default(),
    };

    match cli.command {
        Commands::Asinh(args) => commands::asinh::run(args, &config, cli.verbose),
        Commands::Linear(args) => commands::linear::run(args, &config, cli.verbose),
        Commands::Auto(args) => commands::auto::run(args, &config, cli.verbose),
    }
}
