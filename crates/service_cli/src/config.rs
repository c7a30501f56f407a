//! CLI configuration management.
//!
//! Handles loading of tool configuration from TOML files with environment
//! variable override support.

use projector_core::engine::MAX_HORIZON_MONTHS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Combined snapshot CSV path
    #[serde(default = "default_data_csv")]
    pub data_csv: PathBuf,

    /// First projected month, formatted YYYY-MM
    #[serde(default = "default_start_month")]
    pub start_month: String,

    /// Projection horizon in months
    #[serde(default = "default_horizon_months")]
    pub horizon_months: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_csv() -> PathBuf {
    PathBuf::from("data/fred_combined.csv")
}

fn default_start_month() -> String {
    "2026-02".to_string()
}

fn default_horizon_months() -> usize {
    24
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_csv: default_data_csv(),
            start_month: default_start_month(),
            horizon_months: default_horizon_months(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the given path or return the default config
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(data_csv) = std::env::var("PLUMBLINE_DATA_CSV") {
            self.data_csv = PathBuf::from(data_csv);
        }

        if let Ok(start_month) = std::env::var("PLUMBLINE_START_MONTH") {
            self.start_month = start_month;
        }

        if let Ok(horizon) = std::env::var("PLUMBLINE_HORIZON_MONTHS") {
            if let Ok(horizon) = horizon.parse() {
                self.horizon_months = horizon;
            }
        }

        if let Ok(log_level) = std::env::var("PLUMBLINE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.horizon_months < 1 || self.horizon_months > MAX_HORIZON_MONTHS {
            errors.push(format!(
                "horizon_months {} outside supported range 1..={}",
                self.horizon_months, MAX_HORIZON_MONTHS
            ));
        }

        if parse_start_month(&self.start_month).is_none() {
            errors.push(format!(
                "Invalid start_month '{}'. Expected YYYY-MM",
                self.start_month
            ));
        }

        if self.data_csv.as_os_str().is_empty() {
            errors.push("data_csv cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path).with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Parse a YYYY-MM string into (year, month)
pub fn parse_start_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
