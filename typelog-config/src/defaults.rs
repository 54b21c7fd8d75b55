//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! [`LoggerConfig`](crate::LoggerConfig) fields.

/// SGR parameter used for types registered without a color.
pub const DEFAULT_COLOR: &str = "30m";

pub fn colors() -> bool {
    true
}

pub fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
