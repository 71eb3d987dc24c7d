//! Feature report over a single environment

use super::{
    is_commercial_console, supports_monitoring_tab, supports_multi_tenant_connection_pooling,
    ClassifierError,
};
use crate::models::ConsoleEnvironment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Features gated on the console environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    CommercialConsole,
    MonitoringTab,
    MultiTenantConnectionPooling,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown feature '{0}', expected one of: commercial-console, monitoring-tab, multi-tenant-connection-pooling")]
pub struct UnknownFeatureError(pub String);

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::CommercialConsole,
        Feature::MonitoringTab,
        Feature::MultiTenantConnectionPooling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::CommercialConsole => "commercial-console",
            Feature::MonitoringTab => "monitoring-tab",
            Feature::MultiTenantConnectionPooling => "multi-tenant-connection-pooling",
        }
    }

    /// Run the predicate backing this feature
    pub fn evaluate(&self, env: &ConsoleEnvironment) -> Result<bool, ClassifierError> {
        match self {
            Feature::CommercialConsole => Ok(is_commercial_console(env)),
            Feature::MonitoringTab => supports_monitoring_tab(env),
            Feature::MultiTenantConnectionPooling => supports_multi_tenant_connection_pooling(env),
        }
    }
}

impl FromStr for Feature {
    type Err = UnknownFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| UnknownFeatureError(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every feature decision for one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub environment: ConsoleEnvironment,
    pub commercial_console: bool,
    pub monitoring_tab: bool,
    pub multi_tenant_connection_pooling: bool,
}

impl FeatureReport {
    /// Evaluate all predicates against `env`
    ///
    /// Fails as soon as a strict predicate rejects the mode, so a report is
    /// never built for an unrecognized mode.
    pub fn evaluate(env: &ConsoleEnvironment) -> Result<Self, ClassifierError> {
        Ok(Self {
            environment: env.clone(),
            commercial_console: is_commercial_console(env),
            monitoring_tab: supports_monitoring_tab(env)?,
            multi_tenant_connection_pooling: supports_multi_tenant_connection_pooling(env)?,
        })
    }

    pub fn is_supported(&self, feature: Feature) -> bool {
        match feature {
            Feature::CommercialConsole => self.commercial_console,
            Feature::MonitoringTab => self.monitoring_tab,
            Feature::MultiTenantConnectionPooling => self.multi_tenant_connection_pooling,
        }
    }

    /// Features enabled for this environment, in declaration order
    pub fn supported_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.is_supported(*feature))
            .collect()
    }
}
