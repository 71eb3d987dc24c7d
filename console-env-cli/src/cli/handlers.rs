//! CLI command handlers

use crate::source::{resolve_console_environment, EnvironmentFlags, EnvironmentSource};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console_env_core::models::Configuration;
use console_env_core::services::logging;
use console_env_core::{ConsoleEnvironment, Feature, FeatureReport};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CheckOutput<'a> {
    source: EnvironmentSource,
    resolved_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a FeatureReport,
    supported_features: Vec<Feature>,
}

#[derive(Serialize)]
struct FeatureOutput<'a> {
    feature: Feature,
    supported: bool,
    environment: &'a ConsoleEnvironment,
    source: EnvironmentSource,
}

/// Handle the 'check' command
pub fn handle_check(flags: EnvironmentFlags, json: bool, config: &Configuration) -> Result<()> {
    let resolved = resolve_console_environment(&flags, config)
        .context("Failed to resolve console environment")?;

    let report = FeatureReport::evaluate(&resolved.environment).map_err(|e| {
        logging::log_error(&e.to_string(), Some("check"));
        e
    })?;
    for feature in Feature::ALL {
        logging::log_classification(
            &resolved.environment,
            feature,
            report.is_supported(feature),
        );
    }

    if json {
        let output = CheckOutput {
            source: resolved.source,
            resolved_at: resolved.resolved_at,
            report: &report,
            supported_features: report.supported_features(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Console environment: {} (from {})",
            resolved.environment, resolved.source
        );
        for feature in Feature::ALL {
            let verdict = if report.is_supported(feature) {
                "yes"
            } else {
                "no"
            };
            println!("  {:<33}{}", feature.as_str(), verdict);
        }
    }

    Ok(())
}

/// Handle the 'feature' command
pub fn handle_feature(
    feature: Feature,
    flags: EnvironmentFlags,
    json: bool,
    config: &Configuration,
) -> Result<()> {
    let resolved = resolve_console_environment(&flags, config)
        .context("Failed to resolve console environment")?;

    let supported = feature.evaluate(&resolved.environment).map_err(|e| {
        logging::log_error(&e.to_string(), Some(feature.as_str()));
        e
    })?;
    logging::log_classification(&resolved.environment, feature, supported);

    if json {
        let output = FeatureOutput {
            feature,
            supported,
            environment: &resolved.environment,
            source: resolved.source,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", supported);
    }

    Ok(())
}

/// Handle 'config init': write a default configuration file
pub fn handle_config_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists, pass --force to overwrite",
            config_path.display()
        );
    }

    Configuration::default()
        .save_to_file(config_path)
        .context("Failed to write configuration")?;
    tracing::info!(path = %config_path.display(), "Configuration written");
    println!("Configuration written to {}", config_path.display());

    Ok(())
}

/// Handle 'config show': print the effective configuration as TOML
pub fn handle_config_show(config_path: &Path, config: &Configuration) -> Result<()> {
    println!("# {}", config_path.display());
    print!(
        "{}",
        config
            .to_toml_string()
            .context("Failed to render configuration")?
    );

    if let Err(errors) = config.validate() {
        for error in errors {
            eprintln!("warning: {}", error);
        }
    }

    Ok(())
}
