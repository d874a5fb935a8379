//! Environment-driven configuration for a real-time voice agent.
//!
//! The agent runtime calls [`AgentConfig::load`] once at startup and treats any
//! [`ConfigError`] as fatal.

pub mod config;

pub use config::{AgentConfig, ConfigError};
