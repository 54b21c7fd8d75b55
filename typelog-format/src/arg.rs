//! Loosely typed message arguments.

use crate::number::{format_number, parse_float_prefix, parse_int_prefix, string_to_number};
use serde_json::Value;
use std::fmt;

/// A single value interpolated into a log message.
///
/// Anything that converts into an `Arg` can be passed to the `typelog!`
/// macro; the conversions cover strings, every primitive number type, `bool`,
/// `Option<T>` (where `None` becomes [`Arg::Null`]) and `serde_json::Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Structured value, rendered as JSON under `%j` and inspected elsewhere.
    Json(Value),
    Null,
}

impl Arg {
    /// Whether the argument holds a number.
    pub fn is_numeric(&self) -> bool {
        match self {
            Arg::Int(_) | Arg::UInt(_) | Arg::Float(_) => true,
            Arg::Json(v) => v.is_number(),
            _ => false,
        }
    }

    /// Strict numeric coercion used by `%d`.
    pub(crate) fn to_number(&self) -> f64 {
        match self {
            Arg::Str(s) => string_to_number(s),
            Arg::Int(n) => *n as f64,
            Arg::UInt(n) => *n as f64,
            Arg::Float(f) => *f,
            Arg::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Arg::Null => 0.0,
            Arg::Json(v) => match v {
                Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                Value::String(s) => string_to_number(s),
                Value::Bool(b) => Arg::Bool(*b).to_number(),
                Value::Null => 0.0,
                Value::Array(_) | Value::Object(_) => f64::NAN,
            },
        }
    }

    /// Rendering for `%d`. Integers keep full precision.
    pub(crate) fn render_number(&self) -> String {
        match self {
            Arg::Int(n) => n.to_string(),
            Arg::UInt(n) => n.to_string(),
            other => format_number(other.to_number()),
        }
    }

    /// Rendering for `%i`.
    pub(crate) fn render_int(&self) -> String {
        match self {
            Arg::Int(n) => n.to_string(),
            Arg::UInt(n) => n.to_string(),
            Arg::Float(f) if f.is_finite() => format_number(f.trunc()),
            Arg::Float(_) | Arg::Bool(_) | Arg::Null => "NaN".to_string(),
            Arg::Str(s) => format_number(parse_int_prefix(s)),
            Arg::Json(Value::Number(n)) => match n.as_i64() {
                Some(i) => i.to_string(),
                None => format_number(n.as_f64().map_or(f64::NAN, f64::trunc)),
            },
            Arg::Json(Value::String(s)) => format_number(parse_int_prefix(s)),
            Arg::Json(_) => "NaN".to_string(),
        }
    }

    /// Rendering for `%f`.
    pub(crate) fn render_float(&self) -> String {
        let value = match self {
            Arg::Int(n) => *n as f64,
            Arg::UInt(n) => *n as f64,
            Arg::Float(f) => *f,
            Arg::Str(s) => parse_float_prefix(s),
            Arg::Json(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Arg::Json(Value::String(s)) => parse_float_prefix(s),
            Arg::Bool(_) | Arg::Null | Arg::Json(_) => f64::NAN,
        };
        format_number(value)
    }

    /// Rendering for `%j`.
    ///
    /// Non-finite floats have no JSON representation and render as `null`.
    pub(crate) fn render_json(&self) -> String {
        match self {
            Arg::Str(s) => Value::String(s.clone()).to_string(),
            Arg::Float(f) if !f.is_finite() => "null".to_string(),
            Arg::Json(v) => v.to_string(),
            other => other.to_string(),
        }
    }

    /// Debug-style rendering used by `%o`, `%O` and for trailing arguments
    /// that are not strings.
    ///
    /// Strings are single-quoted, objects print as `{ key: value }` and
    /// arrays as `[ a, b ]`.
    pub fn inspect(&self) -> String {
        match self {
            Arg::Str(s) => quote(s),
            Arg::Json(v) => inspect_value(v),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Arg {
    /// The `%s` form: strings verbatim, numbers without a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::UInt(n) => write!(f, "{n}"),
            Arg::Float(v) => f.write_str(&format_number(*v)),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Null => f.write_str("null"),
            Arg::Json(Value::String(s)) => f.write_str(s),
            Arg::Json(v) => f.write_str(&inspect_value(v)),
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn inspect_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => quote(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(inspect_value).collect();
            format!("[ {} ]", parts.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    let key = if is_identifier(k) { k.clone() } else { quote(k) };
                    format!("{key}: {}", inspect_value(v))
                })
                .collect();
            format!("{{ {} }}", parts.join(", "))
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Int(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::UInt(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(f64::from(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<char> for Arg {
    fn from(v: char) -> Self {
        Arg::Str(v.to_string())
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Str(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Arg::Str(v.clone())
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Json(v)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Null, Into::into)
    }
}
