//! Environment resolution implementation
//!
//! Precedence, highest first:
//! 1. `--mode` (with `--type` / `--pro`)
//! 2. `--env-file`
//! 3. `CONSOLE_MODE` (with `CONSOLE_TYPE` / `CONSOLE_PRO`)
//! 4. `[environment]` table of the configuration file
//!
//! The first source naming a mode supplies the whole environment; sources are
//! never merged.

use super::{EnvironmentSource, ResolutionError, ResolvedEnvironment};
use clap::Args;
use console_env_core::models::Configuration;
use console_env_core::ConsoleEnvironment;
use std::env;
use std::path::{Path, PathBuf};

pub const MODE_VAR: &str = "CONSOLE_MODE";
pub const TYPE_VAR: &str = "CONSOLE_TYPE";
pub const PRO_VAR: &str = "CONSOLE_PRO";

/// Environment selection flags shared by the classifying commands
#[derive(Debug, Clone, Default, Args)]
pub struct EnvironmentFlags {
    /// Console mode (server or cli)
    #[arg(long)]
    pub mode: Option<String>,

    /// Console type for server mode (cloud, pro, pro-lite, ...)
    #[arg(long = "type", value_name = "TYPE")]
    pub console_type: Option<String>,

    /// Pro flag for cli mode
    #[arg(long, value_name = "BOOL")]
    pub pro: Option<bool>,

    /// JSON env document, e.g. {"consoleMode": "server", "consoleType": "cloud"}
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Resolve the console environment using the process environment
pub fn resolve_console_environment(
    flags: &EnvironmentFlags,
    config: &Configuration,
) -> Result<ResolvedEnvironment, ResolutionError> {
    resolve_console_environment_with_env(flags, config, |name| env::var(name).ok())
}

/// Resolve the console environment with a custom variable lookup
///
/// Lets tests supply variables without touching the process environment.
pub fn resolve_console_environment_with_env<F>(
    flags: &EnvironmentFlags,
    config: &Configuration,
    lookup: F,
) -> Result<ResolvedEnvironment, ResolutionError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = &flags.mode {
        let mut environment = ConsoleEnvironment::new(mode.as_str());
        environment.console_type = flags.console_type.as_deref().map(Into::into);
        environment.pro = flags.pro;
        return Ok(resolved(environment, EnvironmentSource::Flags));
    }

    if flags.console_type.is_some() || flags.pro.is_some() {
        return Err(ResolutionError::FlagsWithoutMode);
    }

    if let Some(path) = &flags.env_file {
        let environment = load_env_file(path)?;
        return Ok(resolved(environment, EnvironmentSource::EnvFile));
    }

    // Empty variables count as unset
    let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    if let Some(mode) = var(MODE_VAR) {
        let mut environment = ConsoleEnvironment::new(mode);
        environment.console_type = var(TYPE_VAR).map(Into::into);
        environment.pro = var(PRO_VAR).map(|raw| parse_pro(&raw)).transpose()?;
        return Ok(resolved(
            environment,
            EnvironmentSource::EnvironmentVariables,
        ));
    }

    if let Some(environment) = &config.environment {
        return Ok(resolved(environment.clone(), EnvironmentSource::ConfigFile));
    }

    Err(ResolutionError::MissingMode)
}

fn resolved(environment: ConsoleEnvironment, source: EnvironmentSource) -> ResolvedEnvironment {
    tracing::debug!(
        environment = %environment,
        source = %source,
        "Console environment resolved"
    );
    ResolvedEnvironment::new(environment, source)
}

fn load_env_file(path: &Path) -> Result<ConsoleEnvironment, ResolutionError> {
    let env_file_err = |reason: String| ResolutionError::EnvFile {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| env_file_err(e.to_string()))?;
    ConsoleEnvironment::from_json(&content).map_err(|e| env_file_err(e.to_string()))
}

fn parse_pro(raw: &str) -> Result<bool, ResolutionError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ResolutionError::InvalidProFlag(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_env_core::{ConsoleMode, ConsoleType};
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn config_with(environment: ConsoleEnvironment) -> Configuration {
        Configuration {
            environment: Some(environment),
            ..Configuration::default()
        }
    }

    #[test]
    fn test_flags_take_precedence() {
        let flags = EnvironmentFlags {
            mode: Some("server".to_string()),
            console_type: Some("pro-lite".to_string()),
            ..EnvironmentFlags::default()
        };
        let resolved = resolve_console_environment_with_env(
            &flags,
            &config_with(ConsoleEnvironment::cli(true)),
            vars(&[(MODE_VAR, "cli"), (PRO_VAR, "true")]),
        )
        .unwrap();

        assert_eq!(resolved.source, EnvironmentSource::Flags);
        assert_eq!(resolved.environment, ConsoleEnvironment::server("pro-lite"));
    }

    #[test]
    fn test_flags_keep_unrecognized_mode() {
        let flags = EnvironmentFlags {
            mode: Some("desktop".to_string()),
            ..EnvironmentFlags::default()
        };
        let resolved =
            resolve_console_environment_with_env(&flags, &Configuration::default(), vars(&[]))
                .unwrap();
        assert_eq!(
            resolved.environment.console_mode,
            ConsoleMode::Unrecognized("desktop".to_string())
        );
    }

    #[test]
    fn test_type_without_mode_is_rejected() {
        let flags = EnvironmentFlags {
            pro: Some(true),
            ..EnvironmentFlags::default()
        };
        let result = resolve_console_environment_with_env(
            &flags,
            &Configuration::default(),
            vars(&[(MODE_VAR, "cli")]),
        );
        assert!(matches!(result, Err(ResolutionError::FlagsWithoutMode)));
    }

    #[test]
    fn test_env_file_over_variables() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("env.json");
        std::fs::write(
            &path,
            r#"{"consoleMode": "server", "consoleType": "cloud", "isAdminSecretSet": true}"#,
        )
        .unwrap();

        let flags = EnvironmentFlags {
            env_file: Some(path),
            ..EnvironmentFlags::default()
        };
        let resolved = resolve_console_environment_with_env(
            &flags,
            &Configuration::default(),
            vars(&[(MODE_VAR, "cli")]),
        )
        .unwrap();

        assert_eq!(resolved.source, EnvironmentSource::EnvFile);
        assert_eq!(resolved.environment.console_type, Some(ConsoleType::Cloud));
    }

    #[test]
    fn test_env_file_errors() {
        let temp_dir = tempdir().unwrap();

        let missing = EnvironmentFlags {
            env_file: Some(temp_dir.path().join("missing.json")),
            ..EnvironmentFlags::default()
        };
        let result =
            resolve_console_environment_with_env(&missing, &Configuration::default(), vars(&[]));
        assert!(matches!(result, Err(ResolutionError::EnvFile { .. })));

        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let broken = EnvironmentFlags {
            env_file: Some(path.clone()),
            ..EnvironmentFlags::default()
        };
        let err =
            resolve_console_environment_with_env(&broken, &Configuration::default(), vars(&[]))
                .unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_variables_over_config() {
        let resolved = resolve_console_environment_with_env(
            &EnvironmentFlags::default(),
            &config_with(ConsoleEnvironment::server("cloud")),
            vars(&[(MODE_VAR, "cli"), (PRO_VAR, "TRUE"), (TYPE_VAR, "")]),
        )
        .unwrap();

        assert_eq!(resolved.source, EnvironmentSource::EnvironmentVariables);
        assert_eq!(resolved.environment, ConsoleEnvironment::cli(true));
    }

    #[test]
    fn test_invalid_pro_variable() {
        let result = resolve_console_environment_with_env(
            &EnvironmentFlags::default(),
            &Configuration::default(),
            vars(&[(MODE_VAR, "cli"), (PRO_VAR, "yes")]),
        );
        assert!(matches!(result, Err(ResolutionError::InvalidProFlag(v)) if v == "yes"));
    }

    #[test]
    fn test_config_fallback() {
        let resolved = resolve_console_environment_with_env(
            &EnvironmentFlags::default(),
            &config_with(ConsoleEnvironment::server("pro")),
            vars(&[(MODE_VAR, "  ")]),
        )
        .unwrap();
        assert_eq!(resolved.source, EnvironmentSource::ConfigFile);
        assert_eq!(resolved.environment, ConsoleEnvironment::server("pro"));
    }

    #[test]
    fn test_missing_mode() {
        let result = resolve_console_environment_with_env(
            &EnvironmentFlags::default(),
            &Configuration::default(),
            vars(&[(TYPE_VAR, "cloud")]),
        );
        assert!(matches!(result, Err(ResolutionError::MissingMode)));
    }
}
