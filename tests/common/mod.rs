//! Shared integration test helpers for typelog.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{CaptureSink, standard_logger};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use typelog::{Logger, LoggerConfig};

/// Cloneable in-memory sink whose contents can be read while a logger still
/// owns a handle to it.
#[derive(Clone, Default)]
pub struct CaptureSink {
    buffer: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().clone()).expect("log output is UTF-8")
    }

    /// Number of `write` calls received.
    pub fn write_calls(&self) -> usize {
        *self.writes.lock()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        *self.writes.lock() += 1;
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger with the standard `log` / `error` types writing into a fresh sink.
pub fn standard_logger() -> (Logger<CaptureSink>, CaptureSink) {
    let sink = CaptureSink::new();
    let logger = Logger::from_config(sink.clone(), &LoggerConfig::standard())
        .expect("standard preset registers cleanly");
    (logger, sink)
}
