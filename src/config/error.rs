//! Configuration error types.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised while loading or validating the agent configuration.
///
/// Both kinds are fatal at startup: the entry point reports them and exits
/// before any connection is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric environment variable holds something that is not a float.
    #[error("invalid value for {var}: '{value}' is not a valid number")]
    Parse {
        var: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A loaded value violates a constraint, or a mandatory credential is empty.
    #[error("{message}")]
    Validation { field: &'static str, message: String },
}

impl ConfigError {
    /// Name of the environment variable the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::Parse { var, .. } => *var,
            ConfigError::Validation { field, .. } => *field,
        }
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Validation { field, message: message.into() }
    }
}
