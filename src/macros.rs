/// Write a line of a registered type with printf-style arguments.
///
/// Each trailing argument is converted with [`Arg::from`](crate::Arg), so
/// strings, numbers, booleans, options and `serde_json::Value`s can be mixed
/// freely. Expands to a call to [`Logger::log`](crate::Logger::log) and
/// evaluates to its `Result`.
///
/// ```
/// use typelog::{Logger, typelog};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut logger = Logger::new(&mut out);
/// logger.add_type("log", Some("36m")).unwrap();
/// typelog!(logger, "log", "woot %d", 9).unwrap();
/// drop(logger);
///
/// assert_eq!(out, b"\n    \x1b[36mlog\x1b[m : woot 9");
/// ```
#[macro_export]
macro_rules! typelog {
    ($logger:expr, $name:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($name, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}
