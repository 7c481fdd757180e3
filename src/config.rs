//! Explorer settings, read from an optional TOML file.
//!
//! ```toml
//! backend = "escape-time"
//! colour_map = "blue-white"
//! output_dir = "frames"
//!
//! [[points]]
//! center_x = -0.759856
//! center_y = 0.125547
//! size = 0.046875
//! resolution = 1500
//! iteration_base = 600
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::compute::loader::BackendKind;
use crate::core::data::sample_point::SamplePoint;
use crate::core::errors::validation::ValidationError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("point of interest #{index} is invalid: {source}")]
    InvalidPoint {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// One point-of-interest row as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplePointEntry {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
    pub resolution: u32,
    pub iteration_base: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub backend: BackendKind,
    pub colour_map: MandelbrotColourMapKinds,
    /// Where the headless surface writes its frames.
    pub output_dir: PathBuf,
    pub points: Vec<SamplePointEntry>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            colour_map: MandelbrotColourMapKinds::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            points: default_points(),
        }
    }
}

impl ExplorerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parses and validates a config. Every point of interest must describe
    /// a valid view.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.sample_points()?;

        Ok(config)
    }

    pub fn sample_points(&self) -> Result<Vec<SamplePoint>, ConfigError> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                SamplePoint::new(
                    entry.center_x,
                    entry.center_y,
                    entry.size,
                    entry.resolution,
                    entry.iteration_base,
                )
                .map_err(|source| ConfigError::InvalidPoint { index, source })
            })
            .collect()
    }
}

/// The built-in points of interest.
#[must_use]
pub fn default_points() -> Vec<SamplePointEntry> {
    vec![
        SamplePointEntry {
            center_x: -1.769_383_179_195_515,
            center_y: 0.004_236_847_918_736_7,
            size: 3.0 / 2f64.powi(39),
            resolution: 1000,
            iteration_base: 2000,
        },
        SamplePointEntry {
            center_x: -0.01759,
            center_y: 0.64456,
            size: 3.0 / 2f64.powi(12),
            resolution: 1500,
            iteration_base: 3000,
        },
        SamplePointEntry {
            center_x: -0.759856,
            center_y: 0.125547,
            size: 3.0 / 2f64.powi(6),
            resolution: 1500,
            iteration_base: 600,
        },
    ]
}
