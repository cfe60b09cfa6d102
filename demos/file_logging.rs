//! File logging example
//!
//! Demonstrates building a logger from JSON configuration and redirecting
//! it to a file at runtime.
//!
//! Run with: cargo run --example file_logging

use rust_logx::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logx - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "min_level": "debug",
            "flags": "date|time|shortfile",
            "output": "stdout",
            "prefix": "app"
        }"#,
    )?
    .with_env_overrides()?;
    let logger = config.build()?;

    println!("1. Logging to stdout:");
    logger.info("Application started");
    logger.debug("Loading configuration...");

    println!("\n2. Redirecting to 'application.log':");
    let file = FileSink::new("application.log")?;
    logger.set_appender(Arc::new(PooledAppender::new(file, config.flags)));

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    let missing = std::fs::read_to_string("does-not-exist.toml");
    let _ = logger.on_error(missing, "reading optional settings");

    logger.info("All operations completed");
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
