//! Error types for the Investigator and its configuration

use introspect_meta::ReflectError;
use thiserror::Error;

/// Why an investigation produced no result
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvestigateError {
    /// No subject has been loaded
    #[error("No subject loaded")]
    NoSubject,

    /// Metadata access or invocation failed
    #[error(transparent)]
    Reflect(#[from] ReflectError),
}

/// Errors loading an [`InvestigatorConfig`](crate::InvestigatorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A permission value could not be parsed
    #[error("Invalid permission for `{key}`: {source}")]
    Permission {
        /// Config key holding the bad value
        key: String,
        /// Underlying parse error
        source: ReflectError,
    },
}
