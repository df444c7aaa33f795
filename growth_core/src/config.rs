//! Configuration file support for GrowthCompass.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/growth-compass/config.toml`.

use crate::curves::MAX_WINDOW_MONTHS;
use crate::units::Units;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// How user-entered values are interpreted
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct InputConfig {
    #[serde(default)]
    pub units: Units,
}

/// Result rendering format
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Result rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            decimals: default_decimals(),
        }
    }
}

/// Percentile curve configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Months plotted on each side of the patient's age
    #[serde(default = "default_window_months")]
    pub window_months: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
        }
    }
}

// Default value functions
fn default_decimals() -> usize {
    2
}

fn default_window_months() -> u32 {
    12
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("growth-compass").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.output.decimals > 10 {
            return Err(Error::Config(format!(
                "output.decimals must be at most 10, got {}",
                self.output.decimals
            )));
        }
        if self.chart.window_months > MAX_WINDOW_MONTHS {
            return Err(Error::Config(format!(
                "chart.window_months must be at most {}, got {}",
                MAX_WINDOW_MONTHS, self.chart.window_months
            )));
        }
        Ok(())
    }
}
