//! Typed error variants for the typelog crate.

use thiserror::Error;

/// Errors returned by [`Logger`](crate::Logger) operations.
///
/// Registration errors signal misuse by the caller and are never retried.
/// Stream errors are passed through unchanged from the underlying writer.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The name is already registered or collides with a logger member.
    #[error(".{name}() already exists")]
    AlreadyExists {
        /// The rejected type name.
        name: String,
    },

    /// Log type names must contain at least one character.
    #[error("log type name must not be empty")]
    EmptyName,

    /// A line was requested for a type that was never registered.
    #[error("no such log type: {name}")]
    UnknownType {
        /// The requested type name.
        name: String,
    },

    /// Writing to or flushing the output stream failed.
    #[error("failed to write log output: {0}")]
    Io(#[from] std::io::Error),
}
