//! Runtime configuration for the command-line tool, with TOML persistence.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, DEFAULT_DISTANCE_UNIT};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Unit printed after each leg's weight.
    pub distance_unit: String,

    /// Default output format.
    pub format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set ("error", "warn", "info",
    /// "debug", "trace").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distance_unit: DEFAULT_DISTANCE_UNIT.to_string(),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Self::from_toml(&text)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> GraphResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the TOML schema cannot: the unit must not be blank
    /// and the log level must name a level.
    pub fn validate(&self) -> GraphResult<()> {
        if self.distance_unit.trim().is_empty() {
            return Err(GraphError::Config("distance_unit must not be empty".into()));
        }
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| GraphError::Config(format!("invalid log_level: {}", self.log_level)))?;
        Ok(())
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }
}
