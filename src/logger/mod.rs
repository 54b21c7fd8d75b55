//! Typed, colorized line logger.
//!
//! A [`Logger`] keeps an ordered registry of log type names. Each type has an
//! SGR color and an optional callback. Writing a line of some type produces
//!
//! ```text
//! <padding><ESC>[<color><name><ESC>[m : <message>
//! ```
//!
//! where the padding right-aligns every label on a shared column: the longest
//! registered name gets four leading spaces and shorter names get more. The
//! width is recomputed on every write, so registering a longer name later
//! shifts the lines written after it.
//!
//! The first line a logger writes is preceded by a blank line. Lines are not
//! newline-terminated; messages carry their own `\n` when they need one, and
//! [`Logger::end`] closes a run of output with two newlines.

pub mod core;
mod render;

pub use self::core::{Callback, Logger};
