//! printf-style message interpolation for typelog.
//!
//! Messages are built from a format string plus a list of loosely typed
//! [`Arg`] values, following the classic `util.format` conventions:
//!
//! - `%s` string form, `%d` number, `%i` integer, `%f` float
//! - `%j` JSON, `%o` / `%O` inspect form, `%c` consumed and dropped
//! - `%%` a literal percent sign
//!
//! Directives without a matching argument are left in the output as-is, and
//! arguments without a matching directive are appended, space separated.

mod arg;
mod number;
mod printf;

pub use arg::Arg;
pub use number::format_number;
pub use printf::format;
