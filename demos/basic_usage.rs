//! Basic logger usage example
//!
//! Demonstrates the line layout, flags, and minimum level gating.
//!
//! Run with: cargo run --example basic_usage

use rust_logx::prelude::*;
use rust_logx::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logx - Basic Usage Example ===\n");

    let appender = Arc::new(PooledAppender::new(
        ConsoleSink::stdout(),
        Flags::DATE | Flags::TIME | Flags::SHORT_FILE,
    ));
    let logger = Logger::builder()
        .prefix("demo")
        .shared_appender(appender.clone())
        .build();

    println!("1. Logging at different levels:");
    logger.set_min_level(LogLevel::Trace);
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Logging with the default minimum level (INFO):");
    logger.set_min_level(LogLevel::Info);
    logger.debug("Debug message (hidden)");
    info!(logger, "Info message with {} argument", 1);
    warn!(logger, "Warning with {} and {}", "two", "arguments");

    println!("\n3. Switching flags at runtime:");
    appender.set_flags(Flags::MICROSECONDS | Flags::UTC | Flags::COMPACT);
    logger.info("compact   mode\tcollapses\n   whitespace");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
