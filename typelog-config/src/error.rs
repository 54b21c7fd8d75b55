//! Typed error variants for the typelog-config crate.
//!
//! File loading returns `anyhow::Result` with path context attached; the
//! underlying `ConfigError` can still be recovered with
//! `err.downcast_ref::<ConfigError>()`.

use thiserror::Error;

/// Errors that can occur when reading or validating a logger configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error reading logger config: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML source could not be parsed.
    #[error("YAML parse error in logger config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The TOML source could not be parsed.
    #[error("TOML parse error in logger config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the offending type and the rule it broke.
    #[error("Logger config validation error: {0}")]
    Validation(String),
}
