//! Configuration system for ring charts
//! Loads, validates and writes surface settings in YAML, JSON or TOML

use ring_charts_shared::{RingChartError, SurfaceOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use validation::ConfigValidator;

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingChartConfig {
    pub surface: SurfaceOptions,
}

impl RingChartConfig {
    pub fn surface_options(&self) -> SurfaceOptions {
        self.surface
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RingChartError> for ConfigError {
    fn from(err: RingChartError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
