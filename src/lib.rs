//! Minimal typed logging helper.
//!
//! Register named log types, each with a terminal color and an optional
//! callback, then write colorized lines whose labels line up in one column:
//!
//! ```
//! use typelog::{Logger, typelog};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let mut logger = Logger::new(&mut out);
//! logger
//!     .add_type("log", Some("36m"))?
//!     .add_type("error", Some("31m"))?;
//!
//! typelog!(logger, "log", "woot %d\n", 9)?;
//! typelog!(logger, "error", "%s failed\n", "build")?;
//! logger.end()?;
//! # Ok::<(), typelog::LoggerError>(())
//! ```
//!
//! - [`Logger`]: registry, write protocol and `end`
//! - [`typelog_format`]: the printf-style interpolation behind [`typelog!`]
//! - [`typelog_config`]: YAML/TOML presets for [`Logger::from_config`]

mod error;
pub mod logger;
mod macros;
pub mod shared;

pub use error::LoggerError;
pub use logger::{Callback, Logger};
pub use shared::{SharedLogger, shared};

// Re-export the companion crates for convenience
pub use typelog_config::{ConfigError, LoggerConfig, TypeConfig};
pub use typelog_format::{Arg, format};
