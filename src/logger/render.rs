//! Label padding and line assembly.

/// SGR reset written after every colored label.
pub(super) const COLOR_RESET: &str = "\x1b[m";

/// Minimum gap in front of the longest registered label.
pub(super) const MIN_PADDING: usize = 4;

/// Number of leading spaces for `name` given the registered `types`.
///
/// Labels right-align on a common column: the longest name gets
/// [`MIN_PADDING`] spaces and shorter names make up the difference. Widths
/// are counted in characters, not bytes.
pub(super) fn pad_width(types: &[String], name: &str) -> usize {
    let longest = types
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0);
    (MIN_PADDING + longest).saturating_sub(name.chars().count())
}

/// Assemble `<pad><ESC>[<color><name><ESC>[m : <message>`.
///
/// With `color` set to `None` the escape sequences are left out and only the
/// padded label remains.
pub(super) fn render_line(pad: usize, color: Option<&str>, name: &str, message: &str) -> String {
    let mut line = String::with_capacity(pad + name.len() + message.len() + 16);
    line.extend(std::iter::repeat_n(' ', pad));
    match color {
        Some(color) => {
            line.push_str("\x1b[");
            line.push_str(color);
            line.push_str(name);
            line.push_str(COLOR_RESET);
        }
        None => line.push_str(name),
    }
    line.push_str(" : ");
    line.push_str(message);
    line
}
