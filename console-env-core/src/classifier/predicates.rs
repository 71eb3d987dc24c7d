//! Feature-eligibility predicates

use super::ClassifierError;
use crate::models::{ConsoleEnvironment, ConsoleMode, ConsoleType};

/// Whether the console runs under a paid tier
///
/// Server consoles qualify on cloud, pro and pro-lite; cli consoles qualify
/// when started with `pro: true`. Unrecognized modes or missing fields are
/// simply not commercial, this predicate never fails.
pub fn is_commercial_console(env: &ConsoleEnvironment) -> bool {
    match env.console_mode.canonical() {
        ConsoleMode::Server => matches!(
            console_type(env),
            Some(ConsoleType::Cloud | ConsoleType::Pro | ConsoleType::ProLite)
        ),
        ConsoleMode::Cli => env.pro == Some(true),
        ConsoleMode::Unrecognized(_) => false,
    }
}

/// Whether the console can show the monitoring tab
///
/// # Errors
/// `ClassifierError::InvalidMode` for any mode other than server or cli.
pub fn supports_monitoring_tab(env: &ConsoleEnvironment) -> Result<bool, ClassifierError> {
    match env.console_mode.canonical() {
        // pro-lite and open-source servers have no metrics backend
        ConsoleMode::Server => Ok(matches!(
            console_type(env),
            Some(ConsoleType::Cloud | ConsoleType::Pro)
        )),
        ConsoleMode::Cli => Ok(env.pro == Some(true)),
        ConsoleMode::Unrecognized(mode) => Err(ClassifierError::InvalidMode(mode)),
    }
}

/// Whether the console supports multi-tenant connection pooling
///
/// # Errors
/// `ClassifierError::InvalidMode` for any mode other than server or cli.
pub fn supports_multi_tenant_connection_pooling(
    env: &ConsoleEnvironment,
) -> Result<bool, ClassifierError> {
    match env.console_mode.canonical() {
        ConsoleMode::Server => Ok(matches!(console_type(env), Some(ConsoleType::Cloud))),
        // TODO: narrow to cloud once the cli passes consoleType through; until
        // then every pro cli console is reported as supported.
        ConsoleMode::Cli => Ok(env.pro == Some(true)),
        ConsoleMode::Unrecognized(mode) => Err(ClassifierError::InvalidMode(mode)),
    }
}

fn console_type(env: &ConsoleEnvironment) -> Option<ConsoleType> {
    env.console_type.as_ref().map(ConsoleType::canonical)
}
