//! Thread-safe handle around a [`Logger`].
//!
//! The lock covers the whole write protocol, so the leading blank line is
//! written exactly once and lines from different threads never interleave.

use crate::Logger;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Logger shared between threads.
///
/// Callbacks run while the lock is held and must not lock the same logger:
/// `parking_lot::Mutex` is not reentrant, so that would deadlock. Record the
/// event in the callback and act on it (e.g. call `end`) once the guard is
/// dropped.
pub type SharedLogger<W> = Arc<Mutex<Logger<W>>>;

/// Wrap `logger` for shared use.
pub fn shared<W: Write>(logger: Logger<W>) -> SharedLogger<W> {
    Arc::new(Mutex::new(logger))
}
