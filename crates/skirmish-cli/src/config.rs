//! Configuration file loading for the skirmish front end.
//!
//! Settings come from a TOML file (`skirmish.toml` by default). A missing
//! file means defaults; command-line flags override individual keys.

use serde::{Deserialize, Serialize};
use skirmish_core::{Layout, LayoutError};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The starting layout is not valid notation.
    #[error("Invalid layout: {0}")]
    LayoutError(#[from] LayoutError),
    /// The log level is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

/// How pieces are drawn on the text board.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Layout letters (`P`, `n`, ...).
    #[default]
    Letters,
    /// Chess symbols.
    Unicode,
}

/// Board display settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub glyphs: Glyphs,
    /// Print column letters and row numbers around the board.
    #[serde(default = "default_coordinates")]
    pub coordinates: bool,
}

fn default_coordinates() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            glyphs: Glyphs::default(),
            coordinates: default_coordinates(),
        }
    }
}

/// Main front-end configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Starting layout notation. Defaults to the standard start.
    #[serde(default)]
    pub layout: Option<String>,
    /// Maximum log level written to stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            layout: None,
            log_level: default_log_level(),
            display: DisplayConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration at `path`.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("skirmish.toml")
    }

    /// Parses the configured starting layout.
    pub fn starting_layout(&self) -> Result<Layout, ConfigError> {
        match &self.layout {
            Some(notation) => Ok(Layout::parse(notation)?),
            None => Ok(Layout::startpos()),
        }
    }

    /// Parses the configured log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
