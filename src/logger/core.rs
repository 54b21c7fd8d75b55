//! The [`Logger`] type: type registry, write protocol and `end`.

use super::render;
use crate::error::LoggerError;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use typelog_config::LoggerConfig;
use typelog_config::defaults::DEFAULT_COLOR;
use typelog_format::Arg;

/// Zero-argument hook run after every line written for a type.
///
/// The hook runs inside the `log` call, so the logger is still borrowed; a
/// hook on a [`SharedLogger`](crate::SharedLogger) runs with its lock held.
pub type Callback = Box<dyn FnMut() + Send>;

/// Names that would shadow the logger's own members.
///
/// These are the members a caller reaches on the logger by name (`end`, the
/// `type` registrar) and its public state (`stream`, `types`, `wrote`).
/// Internal helpers are not part of the namespace, so `padleft` and
/// `__log__` stay available as type names.
const RESERVED_NAMES: &[&str] = &["end", "type", "stream", "types", "wrote"];

/// A registered log type.
struct LogType {
    color: String,
    on_invoke: Option<Callback>,
}

impl fmt::Debug for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogType")
            .field("color", &self.color)
            .field("on_invoke", &self.on_invoke.is_some())
            .finish()
    }
}

/// Writes colorized, column-aligned lines for a set of named log types.
///
/// The logger borrows nothing from the caller beyond the stream it writes to;
/// pass `&mut W` to keep ownership of the sink, or hand it over and take it
/// back with [`into_inner`](Self::into_inner). The stream is never closed.
pub struct Logger<W: Write> {
    /// Output sink
    stream: W,
    /// Registered names in registration order
    types: Vec<String>,
    /// Color and callback for each registered name
    entries: HashMap<String, LogType>,
    /// Whether the leading separator has been written
    wrote: bool,
    /// Whether labels are wrapped in SGR sequences
    colors: bool,
}

impl<W: Write> Logger<W> {
    /// Create a logger with no types. Nothing is written.
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            types: Vec::new(),
            entries: HashMap::new(),
            wrote: false,
            colors: true,
        }
    }

    /// Create a logger and register every type from `config`, in order.
    ///
    /// Fails on the first name that is already registered.
    pub fn from_config(stream: W, config: &LoggerConfig) -> Result<Self, LoggerError> {
        let mut logger = Self::new(stream);
        logger.colors = config.colors;
        for ty in &config.types {
            logger.register(&ty.name, Some(config.color_for(ty)), None)?;
        }
        Ok(logger)
    }

    /// Register `name` with an SGR `color` (e.g. `"36m"`) and an optional
    /// callback fired after each line of this type is written.
    ///
    /// A missing or empty color falls back to `30m`. Registering a name twice,
    /// or a name that collides with one of the logger's own members, fails
    /// with [`LoggerError::AlreadyExists`].
    pub fn register(
        &mut self,
        name: &str,
        color: Option<&str>,
        on_invoke: Option<Callback>,
    ) -> Result<&mut Self, LoggerError> {
        if name.is_empty() {
            log::warn!("Rejected log type with an empty name");
            return Err(LoggerError::EmptyName);
        }
        if self.entries.contains_key(name) || RESERVED_NAMES.contains(&name) {
            log::warn!("Rejected log type '{}': already exists", name);
            return Err(LoggerError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let color = match color {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_COLOR,
        };

        log::debug!(
            "Registered log type '{}' (color: {}, callback: {})",
            name,
            color,
            on_invoke.is_some()
        );
        self.types.push(name.to_string());
        self.entries.insert(
            name.to_string(),
            LogType {
                color: color.to_string(),
                on_invoke,
            },
        );
        Ok(self)
    }

    /// Register `name` without a callback.
    pub fn add_type(&mut self, name: &str, color: Option<&str>) -> Result<&mut Self, LoggerError> {
        self.register(name, color, None)
    }

    /// Register `name` with a callback.
    pub fn add_type_with<F>(
        &mut self,
        name: &str,
        color: Option<&str>,
        on_invoke: F,
    ) -> Result<&mut Self, LoggerError>
    where
        F: FnMut() + Send + 'static,
    {
        self.register(name, color, Some(Box::new(on_invoke)))
    }

    /// Builder-style [`add_type`](Self::add_type).
    pub fn with_type(mut self, name: &str, color: Option<&str>) -> Result<Self, LoggerError> {
        self.add_type(name, color)?;
        Ok(self)
    }

    /// Write one line of type `name`, interpolating `args` into `fmt`.
    ///
    /// The very first line written by a logger is preceded by a blank line.
    /// No newline is appended after the message. The type's callback runs
    /// once the line has been written.
    pub fn log(&mut self, name: &str, fmt: &str, args: &[Arg]) -> Result<&mut Self, LoggerError> {
        if !self.entries.contains_key(name) {
            return Err(LoggerError::UnknownType {
                name: name.to_string(),
            });
        }
        let message = typelog_format::format(fmt, args);
        self.write_entry(name, &message)
    }

    /// Like [`log`](Self::log), with the message built by `format_args!`.
    pub fn log_args(
        &mut self,
        name: &str,
        args: fmt::Arguments<'_>,
    ) -> Result<&mut Self, LoggerError> {
        let message = args.to_string();
        self.write_entry(name, &message)
    }

    fn write_entry(&mut self, name: &str, message: &str) -> Result<&mut Self, LoggerError> {
        let color = match self.entries.get(name) {
            Some(entry) => entry.color.clone(),
            None => {
                return Err(LoggerError::UnknownType {
                    name: name.to_string(),
                });
            }
        };

        if !self.wrote {
            self.write_raw(b"\n")?;
            self.wrote = true;
        }

        // Width depends on what is registered now, not at registration time.
        let pad = render::pad_width(&self.types, name);
        let line = render::render_line(
            pad,
            self.colors.then_some(color.as_str()),
            name,
            message,
        );
        self.write_raw(line.as_bytes())?;

        if let Some(callback) = self
            .entries
            .get_mut(name)
            .and_then(|entry| entry.on_invoke.as_mut())
        {
            callback();
        }
        Ok(self)
    }

    /// Write a blank-line separator (two newlines). The stream stays open.
    pub fn end(&mut self) -> Result<&mut Self, LoggerError> {
        self.write_raw(b"\n\n")?;
        Ok(self)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), LoggerError> {
        self.stream
            .write_all(bytes)
            .and_then(|()| self.stream.flush())
            .map_err(|e| {
                log::warn!("Failed to write log output: {}", e);
                LoggerError::Io(e)
            })
    }

    /// Registered type names, in registration order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Whether `name` is a registered type.
    pub fn has_type(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// SGR color registered for `name`.
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.color.as_str())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether the leading separator has been written yet.
    pub fn has_written(&self) -> bool {
        self.wrote
    }

    /// Whether labels are currently colorized.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Enable or disable SGR sequences around labels. Padding is unaffected.
    pub fn set_colors(&mut self, enabled: bool) {
        self.colors = enabled;
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.stream
    }

    /// Mutably borrow the underlying stream. Writing to it directly bypasses
    /// the leading separator.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.stream
    }

    /// Give the stream back to the caller.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("types", &self.types)
            .field("entries", &self.entries)
            .field("wrote", &self.wrote)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}
