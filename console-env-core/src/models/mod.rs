//! Data models for console-env

pub mod configuration;
pub mod environment;

pub use configuration::*;
pub use environment::*;
