//! CLI command handling

pub mod config;
pub mod handlers;
