//! ConsoleEnvironment entity
//!
//! Typed form of the env document a console is started with. Modes and types
//! keep any value they do not recognize so the classifier can decide what to
//! do with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Where the console runs
///
/// Build values through `From`; equality and the classifier compare the wire
/// string, so `Unrecognized("server")` behaves exactly like `Server`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsoleMode {
    /// Console served by the engine itself
    Server,
    /// Console served by the command-line tool
    Cli,
    /// Any other mode string
    Unrecognized(String),
}

impl ConsoleMode {
    pub fn as_str(&self) -> &str {
        match self {
            ConsoleMode::Server => "server",
            ConsoleMode::Cli => "cli",
            ConsoleMode::Unrecognized(raw) => raw,
        }
    }

    /// Known variant for this wire string, if any
    pub fn canonical(&self) -> Self {
        Self::from(self.as_str())
    }
}

impl PartialEq for ConsoleMode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Hash for ConsoleMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ConsoleMode {
    fn from(raw: &str) -> Self {
        match raw {
            "server" => ConsoleMode::Server,
            "cli" => ConsoleMode::Cli,
            other => ConsoleMode::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ConsoleMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "server" => ConsoleMode::Server,
            "cli" => ConsoleMode::Cli,
            _ => ConsoleMode::Unrecognized(raw),
        }
    }
}

impl From<ConsoleMode> for String {
    fn from(mode: ConsoleMode) -> Self {
        match mode {
            ConsoleMode::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ConsoleMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConsoleMode::from(s))
    }
}

impl fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment tier reported by a server-mode console
///
/// Same canonicalization as `ConsoleMode`: `Other("cloud")` equals `Cloud`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsoleType {
    /// Hosted cloud offering
    Cloud,
    /// Self-hosted enterprise
    Pro,
    /// Self-hosted enterprise without the metrics backend
    ProLite,
    /// Unlisted tier, e.g. open-source builds
    Other(String),
}

impl ConsoleType {
    pub fn as_str(&self) -> &str {
        match self {
            ConsoleType::Cloud => "cloud",
            ConsoleType::Pro => "pro",
            ConsoleType::ProLite => "pro-lite",
            ConsoleType::Other(raw) => raw,
        }
    }

    /// Known variant for this wire string, if any
    pub fn canonical(&self) -> Self {
        Self::from(self.as_str())
    }
}

impl PartialEq for ConsoleType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Hash for ConsoleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ConsoleType {
    fn from(raw: &str) -> Self {
        match raw {
            "cloud" => ConsoleType::Cloud,
            "pro" => ConsoleType::Pro,
            "pro-lite" => ConsoleType::ProLite,
            other => ConsoleType::Other(other.to_string()),
        }
    }
}

impl From<String> for ConsoleType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "cloud" => ConsoleType::Cloud,
            "pro" => ConsoleType::Pro,
            "pro-lite" => ConsoleType::ProLite,
            _ => ConsoleType::Other(raw),
        }
    }
}

impl From<ConsoleType> for String {
    fn from(console_type: ConsoleType) -> Self {
        match console_type {
            ConsoleType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ConsoleType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConsoleType::from(s))
    }
}

impl fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime environment of a console
///
/// Only one of `console_type` and `pro` matters at a time: `console_type` in
/// server mode, `pro` in cli mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleEnvironment {
    pub console_mode: ConsoleMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_type: Option<ConsoleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro: Option<bool>,
}

impl ConsoleEnvironment {
    /// Create an environment with only the mode set
    pub fn new(console_mode: impl Into<ConsoleMode>) -> Self {
        Self {
            console_mode: console_mode.into(),
            console_type: None,
            pro: None,
        }
    }

    /// Create a server-mode environment of the given tier
    pub fn server(console_type: impl Into<ConsoleType>) -> Self {
        Self::new(ConsoleMode::Server).with_console_type(console_type)
    }

    /// Create a cli-mode environment
    pub fn cli(pro: bool) -> Self {
        Self::new(ConsoleMode::Cli).with_pro(pro)
    }

    pub fn with_console_type(mut self, console_type: impl Into<ConsoleType>) -> Self {
        self.console_type = Some(console_type.into());
        self
    }

    pub fn with_pro(mut self, pro: bool) -> Self {
        self.pro = Some(pro);
        self
    }

    /// Parse a console env document, ignoring keys this crate does not use
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }
}

impl fmt::Display for ConsoleEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode={}", self.console_mode)?;
        if let Some(console_type) = &self.console_type {
            write!(f, " type={}", console_type)?;
        }
        if let Some(pro) = self.pro {
            write!(f, " pro={}", pro)?;
        }
        Ok(())
    }
}
