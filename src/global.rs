//! Process-wide default logger
//!
//! The default logger is built on first use (stderr, `Flags::STD`, minimum
//! level INFO) or installed once with [`init`]. Construction happens exactly
//! once even when many threads race on first access. The functions below
//! forward 1:1 to that [`Logger`].
//!
//! ```
//! use rust_logx::{global, LogLevel};
//!
//! global::set_min_level(LogLevel::Warning);
//! global::warning("disk 91% full");
//! let worker = global::child("worker");
//! worker.error("job failed");
//! ```

use crate::core::{Appender, Flags, LogLevel, Logger, LoggerError, Result};
use std::fmt;
use std::sync::{Arc, OnceLock};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The default logger, built on first call
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Install `logger` as the default. Fails once the default exists, including
/// when it was created implicitly by an earlier logging call.
pub fn init(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::config("global logger", "already initialized"))
}

pub fn set_appender(appender: Arc<dyn Appender>) {
    logger().set_appender(appender);
}

pub fn appender() -> Arc<dyn Appender> {
    logger().appender()
}

pub fn flags() -> Flags {
    logger().flags()
}

/// Swap the format flags of the default logger's appender
pub fn set_flags(flags: Flags) {
    logger().set_flags(flags);
}

pub fn set_min_level(level: LogLevel) {
    logger().set_min_level(level);
}

pub fn min_level() -> LogLevel {
    logger().min_level()
}

/// Independent logger derived from the default one
pub fn child(prefix: impl Into<String>) -> Logger {
    logger().child(prefix)
}

pub fn child_with_tags<I, T>(prefix: impl Into<String>, tags: I) -> Logger
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    logger().child_with_tags(prefix, tags)
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    logger().log(level, message);
}

#[track_caller]
pub fn trace(message: impl fmt::Display) {
    logger().trace(message);
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    logger().debug(message);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

#[track_caller]
pub fn warning(message: impl fmt::Display) {
    logger().warning(message);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    logger().error(message);
}

#[track_caller]
pub fn critical(message: impl fmt::Display) {
    logger().critical(message);
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    logger().fatal(message)
}

#[track_caller]
pub fn panic(message: impl fmt::Display) -> ! {
    logger().panic(message)
}

#[track_caller]
pub fn on_warning<T, E: fmt::Display>(
    result: std::result::Result<T, E>,
    message: impl fmt::Display,
) -> std::result::Result<T, E> {
    logger().on_warning(result, message)
}

#[track_caller]
pub fn on_error<T, E: fmt::Display>(
    result: std::result::Result<T, E>,
    message: impl fmt::Display,
) -> std::result::Result<T, E> {
    logger().on_error(result, message)
}

#[track_caller]
pub fn on_critical<T, E: fmt::Display>(
    result: std::result::Result<T, E>,
    message: impl fmt::Display,
) -> std::result::Result<T, E> {
    logger().on_critical(result, message)
}

#[track_caller]
pub fn on_fatal<T, E: fmt::Display>(result: std::result::Result<T, E>, message: impl fmt::Display) -> T {
    logger().on_fatal(result, message)
}

#[track_caller]
pub fn on_panic<T, E: fmt::Display>(result: std::result::Result<T, E>, message: impl fmt::Display) -> T {
    logger().on_panic(result, message)
}

pub fn flush() -> Result<()> {
    logger().flush()
}
