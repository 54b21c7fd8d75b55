//! Prints a short fake build report to stderr.
//!
//! Run with `cargo run --example build_report`. Set `NO_COLOR=1` to see the
//! plain rendering, or drop a `config.yaml` into the typelog config directory
//! to change the types.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use typelog::{Logger, LoggerConfig, typelog};

fn main() -> anyhow::Result<()> {
    let mut config = LoggerConfig::load_default()?;
    if config.types.is_empty() {
        config = LoggerConfig::standard();
    }
    config.apply_env();

    let failed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&failed);

    let mut logger = Logger::new(io::stderr());
    logger.set_colors(config.colors);
    for ty in config.types.iter().filter(|t| t.name != "error") {
        logger.add_type(&ty.name, Some(config.color_for(ty)))?;
    }
    logger.add_type_with("error", Some("31m"), move || {
        flag.store(true, Ordering::SeqCst);
    })?;
    if !logger.has_type("compile") {
        logger.add_type("compile", Some("35m"))?;
    }

    for (krate, ms) in [("typelog-format", 412u32), ("typelog-config", 655)] {
        typelog!(logger, "compile", "%s in %dms\n", krate, ms)?;
    }
    typelog!(logger, "error", "%s: %j\n", "typelog", serde_json::json!({"tests": 3}))?;

    if failed.load(Ordering::SeqCst) {
        logger.end()?;
        std::process::exit(1);
    }
    Ok(())
}
