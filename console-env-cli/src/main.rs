mod cli;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::config::ConfigCommands;
use cli::handlers;
use console_env_core::models::{Configuration, LogLevel};
use console_env_core::services::logging;
use console_env_core::Feature;
use source::EnvironmentFlags;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "console-env")]
#[command(version)]
#[command(about = "Classify a console environment into the features it may enable")]
#[command(
    help_template = "{name} - {version}\n{about}\n\n{usage-heading}\n  {usage}\n\n{all-args}{options}\n"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Path to configuration file (default: <config dir>/console-env/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every feature decision for an environment
    ///
    /// Examples:
    ///   console-env check --mode server --type pro-lite
    ///   console-env check --mode cli --pro true --json
    ///   CONSOLE_MODE=server CONSOLE_TYPE=cloud console-env check
    Check {
        #[command(flatten)]
        environment: EnvironmentFlags,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Decide a single feature, printing true or false
    ///
    /// Features: commercial-console, monitoring-tab, multi-tenant-connection-pooling
    Feature {
        /// Feature name
        feature: Feature,

        #[command(flatten)]
        environment: EnvironmentFlags,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Configuration::default_config_path()?,
    };
    // init never reads the file it is about to replace
    if let Commands::Config {
        command: ConfigCommands::Init { force },
    } = &cli.command
    {
        logging::init_logging(cli.log_level.unwrap_or_default())
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        return handlers::handle_config_init(&config_path, *force);
    }

    // config show fails on a broken file; classifying commands fall back to defaults
    let strict = matches!(cli.command, Commands::Config { .. });
    let (config, load_error) = match Configuration::load_from_file(&config_path) {
        Ok(config) => (config, None),
        Err(e) if !strict => (Configuration::default(), Some(e)),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to load configuration from {}", config_path.display())
            })
        }
    };

    logging::init_logging(cli.log_level.unwrap_or(config.log_level))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Ignoring unreadable configuration, using defaults");
    } else if !strict {
        // config show prints these itself
        if let Err(errors) = config.validate() {
            for error in &errors {
                tracing::warn!(path = %config_path.display(), error = %error, "Invalid configuration value");
            }
        }
    }

    match cli.command {
        Commands::Check { environment, json } => {
            handlers::handle_check(environment, json || config.output_json, &config)?;
        }
        Commands::Feature {
            feature,
            environment,
            json,
        } => {
            handlers::handle_feature(feature, environment, json || config.output_json, &config)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => {
                handlers::handle_config_init(&config_path, force)?;
            }
            ConfigCommands::Show => {
                handlers::handle_config_show(&config_path, &config)?;
            }
        },
    }

    Ok(())
}
