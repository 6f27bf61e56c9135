use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ReadabilityError, Result};
use crate::report::OutputFormat;
use crate::selector::MetricSelector;

/// Presentation settings for the `readability` CLI. Command line flags take
/// precedence over anything loaded here.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Selector used when none is given and no prompt is possible.
    pub default_metric: String,
    pub format: OutputFormat,
    /// Ask for the selector on stdin after printing the counts.
    pub prompt: bool,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            default_metric: "all".to_string(),
            format: OutputFormat::Text,
            prompt: true,
        }
    }
}

impl ReadabilityConfig {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        let io_err = |source: std::io::Error| ReadabilityError::Io { path: path.to_path_buf(), source };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_err)?;

        let config: ReadabilityConfig = serde_json::from_str(&contents).map_err(|source| {
            ReadabilityError::Config { path: path.to_path_buf(), source }
        })?;
        config.default_selector()?;
        Ok(config)
    }

    pub fn default_selector(&self) -> Result<MetricSelector> {
        self.default_metric.parse()
    }
}
