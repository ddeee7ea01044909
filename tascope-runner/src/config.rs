//! TOML run configuration.
//!
//! ```toml
//! [analysis]
//! parallel_timeframes = false
//!
//! [input]
//! path = "data/history.csv"
//! format = "csv"            # optional, inferred from the extension
//! symbols = ["BTC", "ETH"]  # optional, defaults to every symbol in the file
//!
//! [output]
//! dir = "results"           # optional
//! pretty = true
//! ```
//!
//! Indicator periods and signal thresholds are fixed and not configurable.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tascope_core::AnalysisOptions;

use crate::data_loader::HistoryFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A complete batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub analysis: AnalysisOptions,
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub format: Option<HistoryFormat>,
    /// Empty means every symbol in the file.
    #[serde(default)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for per-symbol JSON/CSV and `summary.md`. Nothing is written when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
}

impl RunConfig {
    /// Config that analyses every symbol of one history file.
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            analysis: AnalysisOptions::default(),
            input: InputConfig {
                path: path.into(),
                format: None,
                symbols: Vec::new(),
            },
            output: OutputConfig::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file. A relative input path or
    /// output dir is resolved against the config file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text)?;

        if let Some(base) = path.parent() {
            if config.input.path.is_relative() {
                config.input.path = base.join(&config.input.path);
            }
            if let Some(dir) = config.output.dir.as_mut().filter(|d| d.is_relative()) {
                *dir = base.join(&*dir);
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input.path must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for symbol in &self.input.symbols {
            if symbol.trim().is_empty() {
                return Err(ConfigError::Invalid("input.symbols contains an empty symbol".into()));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "input.symbols lists '{symbol}' more than once"
                )));
            }
        }
        Ok(())
    }
}
