//! Numeric coercions used by the `%d`, `%i` and `%f` directives.
//!
//! These mirror the loose string-to-number rules of dynamic languages so that
//! `"42px"` reads as `42` under `%i` but as `NaN` under `%d`.

/// Render a number the way a JavaScript runtime prints it.
///
/// Whole values print without a fractional part (`9`, not `9.0`), and the
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`. Magnitudes
/// of `1e21` and above, or non-zero ones below `1e-6`, switch to exponent
/// form with a signed exponent (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value != 0.0 && !(1e-6..1e21).contains(&value.abs()) {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

// `{:e}` already yields the shortest round-trip digits; only the exponent
// sign differs.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Strict conversion of a whole string to a number (`Number("...")`).
///
/// Surrounding whitespace is ignored, an empty string is zero, and any
/// trailing garbage yields `NaN`.
pub(crate) fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let lower = trimmed.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts "inf" and "nan" spellings that a JS runtime rejects.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Lenient integer prefix parse (`parseInt("...")`).
///
/// Leading whitespace and a sign are accepted, then the longest run of
/// decimal digits (or hex digits after `0x`). No digits yields `NaN`.
pub(crate) fn parse_int_prefix(s: &str) -> f64 {
    let mut rest = s.trim_start();
    let negative = match rest.chars().next() {
        Some('-') => {
            rest = &rest[1..];
            true
        }
        Some('+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let (digits, radix) = match rest.get(..2) {
        Some("0x") | Some("0X") => (&rest[2..], 16),
        _ => (rest, 10),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * f64::from(radix) + f64::from(d);
                seen = true;
            }
            None => break,
        }
    }

    if !seen {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

/// Lenient float prefix parse (`parseFloat("...")`).
///
/// Reads the longest leading decimal literal, with optional fraction and
/// exponent. `Infinity` is recognised as a prefix too.
pub(crate) fn parse_float_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when it carries at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
