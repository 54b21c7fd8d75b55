//! Environment overrides for color output.
//!
//! `NO_COLOR` (any non-empty value) disables colors, following the
//! no-color.org convention. `TYPELOG_COLORS` then has the final say when it
//! holds a recognised boolean.

pub(crate) const NO_COLOR: &str = "NO_COLOR";
pub(crate) const TYPELOG_COLORS: &str = "TYPELOG_COLORS";

/// Resolve the color switch from `current` and the given variable lookup.
pub(crate) fn resolve_colors(current: bool, lookup: impl Fn(&str) -> Option<String>) -> bool {
    let mut colors = current;

    if lookup(NO_COLOR).is_some_and(|v| !v.is_empty()) {
        colors = false;
    }

    if let Some(value) = lookup(TYPELOG_COLORS) {
        match parse_switch(&value) {
            Some(enabled) => colors = enabled,
            None => log::warn!("Ignoring unrecognised {TYPELOG_COLORS} value '{value}'"),
        }
    }

    colors
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
