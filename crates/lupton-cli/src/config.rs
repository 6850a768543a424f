//! YAML defaults for stretch parameters.
//!
//! ```yaml
//! minimum: [0.0, 0.05, 0.1]
//! stretch: 0.5
//! q: 10
//! pedestal: 100
//! estimator: percentile
//! lower: 0.5
//! upper: 99.5
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use anyhow::{Context, Result};
use lupton_core::Triple;
use serde::Deserialize;
use std::path::Path;

/// Limit estimator selectable on the command line and in config files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    /// Full finite range of the intensity
    #[default]
    #[value(name = "minmax")]
    MinMax,
    /// Percentile clipping
    Percentile,
}

/// One value for all channels, or one per channel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TripleValue {
    Scalar(f64),
    PerChannel([f64; 3]),
}

impl From<TripleValue> for Triple {
    fn from(v: TripleValue) -> Self {
        match v {
            TripleValue::Scalar(s) => Triple::splat(s),
            TripleValue::PerChannel(c) => Triple(c),
        }
    }
}

/// Stretch defaults read from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StretchConfig {
    pub minimum: Option<TripleValue>,
    pub maximum: Option<f64>,
    pub stretch: Option<f64>,
    pub q: Option<f64>,
    pub pedestal: Option<TripleValue>,
    pub estimator: Option<EstimatorKind>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl StretchConfig {
    /// Loads a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses config from a YAML string. An empty document yields defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn minimum(&self) -> Option<Triple> {
        self.minimum.map(Triple::from)
    }

    pub fn pedestal(&self) -> Option<Triple> {
        self.pedestal.map(Triple::from)
    }
}
