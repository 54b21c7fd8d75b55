//! Directive scanning and interpolation.

use crate::Arg;

/// Interpolate `args` into `fmt`.
///
/// With no arguments the format string is returned untouched, `%%` included.
/// Otherwise each directive consumes the next argument; a directive with no
/// argument left stays in the output literally, and leftover arguments are
/// appended with a single space before each (strings verbatim, everything
/// else in its [`Arg::inspect`] form).
///
/// ```
/// use typelog_format::{Arg, format};
///
/// assert_eq!(format("woot %d", &[Arg::from(9)]), "woot 9");
/// assert_eq!(format("%s=%d", &[Arg::from("a")]), "a=%d");
/// assert_eq!(format("done", &[Arg::from("x"), Arg::from(2)]), "done x 2");
/// ```
pub fn format(fmt: &str, args: &[Arg]) -> String {
    if args.is_empty() {
        return fmt.to_string();
    }

    let mut out = String::with_capacity(fmt.len() + args.len() * 8);
    let mut next = 0;
    let mut chars = fmt.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let Some(&directive) = chars.peek() else {
            out.push('%');
            break;
        };

        match directive {
            '%' => {
                chars.next();
                out.push('%');
            }
            's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c' => {
                chars.next();
                match args.get(next) {
                    Some(arg) => {
                        next += 1;
                        render(&mut out, directive, arg);
                    }
                    None => {
                        out.push('%');
                        out.push(directive);
                    }
                }
            }
            // Unknown directive: keep the '%' and let the loop copy the rest.
            _ => out.push('%'),
        }
    }

    for arg in &args[next..] {
        out.push(' ');
        match arg {
            Arg::Str(s) => out.push_str(s),
            other => out.push_str(&other.inspect()),
        }
    }

    out
}

fn render(out: &mut String, directive: char, arg: &Arg) {
    match directive {
        's' => out.push_str(&arg.to_string()),
        'd' => out.push_str(&arg.render_number()),
        'i' => out.push_str(&arg.render_int()),
        'f' => out.push_str(&arg.render_float()),
        'j' => out.push_str(&arg.render_json()),
        'o' | 'O' => out.push_str(&arg.inspect()),
        // %c carries CSS in browser consoles; it has no terminal meaning.
        _ => {}
    }
}
