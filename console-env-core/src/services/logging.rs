//! Logging service

use crate::classifier::Feature;
use crate::models::{ConsoleEnvironment, LogLevel};

/// Initialize logging with the specified level
///
/// `RUST_LOG`, when set, wins over `level`.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "console_env=error,console_env_core=error",
        LogLevel::Warn => "console_env=warn,console_env_core=warn",
        LogLevel::Info => "console_env=info,console_env_core=info",
        LogLevel::Debug => "console_env=debug,console_env_core=debug",
        LogLevel::Trace => "console_env=trace,console_env_core=trace",
    }
}

/// Log a feature decision
pub fn log_classification(env: &ConsoleEnvironment, feature: Feature, supported: bool) {
    tracing::info!(
        console_mode = %env.console_mode,
        console_type = env.console_type.as_ref().map(|t| t.as_str()).unwrap_or(""),
        pro = ?env.pro,
        feature = feature.as_str(),
        supported = supported,
        "Feature classified"
    );
}

/// Log a system error
pub fn log_error(error: &str, context: Option<&str>) {
    tracing::error!(
        error = error,
        context = context.unwrap_or(""),
        "System error occurred"
    );
}
