//! Environment classifier
//!
//! Pure predicates deciding which commercial features a console environment
//! is eligible for.

mod predicates;
mod report;

pub use predicates::{
    is_commercial_console, supports_monitoring_tab, supports_multi_tenant_connection_pooling,
};
pub use report::{Feature, FeatureReport, UnknownFeatureError};

use thiserror::Error;

/// Error types for environment classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// Only server and cli consoles exist
    #[error("Invalid consoleMode: {0}")]
    InvalidMode(String),
}
