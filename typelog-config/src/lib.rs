//! Configuration presets for typelog loggers.
//!
//! A [`LoggerConfig`] lists the log types a logger should start with, in
//! registration order, plus a couple of rendering switches. Presets can be
//! written by hand, parsed from YAML or TOML, or loaded from the user's
//! config directory:
//!
//! ```yaml
//! colors: true
//! types:
//!   - name: log
//!     color: 36m
//!   - name: error
//!     color: 31m
//! ```

pub mod config;
pub mod defaults;
mod env;
mod error;

pub use config::{LoggerConfig, TypeConfig};
pub use error::ConfigError;
