//! # console-env core library
//!
//! Typed console environment, feature-eligibility classifier, configuration
//! and logging shared by the `console-env` tool.

pub mod classifier;
pub mod models;
pub mod services;

pub use classifier::{
    is_commercial_console, supports_monitoring_tab, supports_multi_tenant_connection_pooling,
    ClassifierError, Feature, FeatureReport,
};
pub use models::{ConsoleEnvironment, ConsoleMode, ConsoleType};
