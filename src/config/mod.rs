//! Configuration module for the voice agent.
//!
//! Reads the agent settings from environment variables and validates them.

#[allow(clippy::module_inception)]
mod config;
pub mod env;
mod error;

pub use config::AgentConfig;
pub use error::ConfigError;
