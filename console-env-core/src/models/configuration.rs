//! Configuration data structures

use super::environment::{ConsoleEnvironment, ConsoleMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Logging level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warn")]
    #[default]
    Warn,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Logging verbosity level
    pub log_level: LogLevel,
    /// Print command output as JSON unless overridden on the command line
    pub output_json: bool,
    /// Environment used when no flag, env file or variable names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<ConsoleEnvironment>,
}

impl Configuration {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            // Return default configuration if file doesn't exist
            return Ok(Configuration::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)
    }

    /// Get the XDG config directory path
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("console-env").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(env) = &self.environment {
            match env.console_mode.canonical() {
                ConsoleMode::Server => {
                    if env.pro.is_some() {
                        errors.push("environment.pro only applies to cli mode".to_string());
                    }
                }
                ConsoleMode::Cli => {
                    if env.console_type.is_some() {
                        errors.push(
                            "environment.consoleType only applies to server mode".to_string(),
                        );
                    }
                }
                ConsoleMode::Unrecognized(raw) => {
                    errors.push(format!(
                        "environment.consoleMode must be 'server' or 'cli', got '{}'",
                        raw
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
