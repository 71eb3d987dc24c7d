//! Environment resolution
//!
//! Works out which console environment a command should classify from
//! command-line flags, an env document, process environment variables and
//! the configuration file.

mod resolution;
mod resolved_environment;

pub use resolution::{resolve_console_environment, EnvironmentFlags};
pub use resolved_environment::{EnvironmentSource, ResolvedEnvironment};

use std::path::PathBuf;
use thiserror::Error;

/// Error types for environment resolution
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("No console mode given: pass --mode, --env-file, set CONSOLE_MODE or add an [environment] table to the config file")]
    MissingMode,
    #[error("--type and --pro require --mode")]
    FlagsWithoutMode,
    #[error("Invalid pro flag '{0}': expected true or false")]
    InvalidProFlag(String),
    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },
}
