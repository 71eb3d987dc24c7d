//! ResolvedEnvironment entity

use chrono::{DateTime, Utc};
use console_env_core::ConsoleEnvironment;
use serde::Serialize;
use std::fmt;

/// Source that supplied the console environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentSource {
    /// --mode, --type and --pro flags
    Flags,
    /// JSON env document passed with --env-file
    EnvFile,
    /// CONSOLE_MODE, CONSOLE_TYPE and CONSOLE_PRO variables
    EnvironmentVariables,
    /// [environment] table of the configuration file
    ConfigFile,
}

impl fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnvironmentSource::Flags => "flags",
            EnvironmentSource::EnvFile => "env file",
            EnvironmentSource::EnvironmentVariables => "environment variables",
            EnvironmentSource::ConfigFile => "config file",
        };
        f.write_str(name)
    }
}

/// Console environment together with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEnvironment {
    pub environment: ConsoleEnvironment,
    pub source: EnvironmentSource,
    /// Timestamp when the environment was resolved
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedEnvironment {
    pub fn new(environment: ConsoleEnvironment, source: EnvironmentSource) -> Self {
        Self {
            environment,
            source,
            resolved_at: Utc::now(),
        }
    }
}
