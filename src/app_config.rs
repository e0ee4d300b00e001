use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::{Context, Result};

use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Variable substitution settings
    #[serde(default)]
    pub variables: VariablesConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Fail the run when any error diagnostic is found
    #[serde(default)]
    pub strict: bool,
}

/// Variable substitution configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VariablesConfig {
    // @field: Substitute and discover placeholders
    #[serde(default = "default_variables_enabled")]
    pub enabled: bool,

    // @field: Table file name, looked up next to the input file
    #[serde(default = "default_variables_file_name")]
    pub file_name: String,
}

impl Default for VariablesConfig {
    fn default() -> Self {
        Self {
            enabled: default_variables_enabled(),
            file_name: default_variables_file_name(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    // @field: Suffix inserted before the extension (movie.fixed.srt)
    #[serde(default = "default_output_suffix")]
    pub suffix: String,

    // @field: End the written file with a newline
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
            trailing_newline: default_trailing_newline(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_variables_enabled() -> bool {
    true
}

fn default_variables_file_name() -> String {
    "variables.json".to_string()
}

fn default_output_suffix() -> String {
    "fixed".to_string()
}

fn default_trailing_newline() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the configuration, writing a default one if the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        log::warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.output.suffix.trim().is_empty() {
            return Err(AppError::Config("Output suffix must not be empty".to_string()));
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(AppError::Config(format!(
                "Output suffix must not contain path separators: {}",
                self.output.suffix
            )));
        }

        if self.variables.enabled && self.variables.file_name.trim().is_empty() {
            return Err(AppError::Config(
                "Variables file name must not be empty when variables are enabled".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            variables: VariablesConfig::default(),
            output: OutputConfig::default(),
            strict: false,
        }
    }
}
