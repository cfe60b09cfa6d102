//! # Rust Logx
//!
//! A lightweight leveled line logger. Each line carries an optional
//! timestamp, a severity label, a per-component prefix and tags, and the
//! caller's `file:line`, and is written to a pluggable sink in one call.
//!
//! ## Features
//!
//! - **Fixed line layout**: `[date] [time] LEVEL [prefix] [[tags]] [file:line] message`
//! - **Swappable appenders**: replace a logger's output at runtime without locks on the log path
//! - **Child loggers**: derive per-component prefixes and tags from a parent
//! - **Buffer reuse**: the default appender formats into pooled buffers
//!
//! ```
//! use rust_logx::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(Arc::new(PooledAppender::new(sink.clone(), Flags::NONE)));
//! let db = logger.child_with_tags("db", ["primary"]);
//!
//! rust_logx::info!(db, "connected in {}ms", 12);
//! assert_eq!(sink.contents(), "INFO db [primary] connected in 12ms\n");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, FileSink, MemorySink, PooledAppender, SimpleAppender};
    pub use crate::core::{
        Appender, AppenderMetrics, Flags, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, OutputTarget, Record, Result, Sink,
    };
}

pub use appenders::{ConsoleSink, FileSink, MemorySink, PooledAppender, SimpleAppender};
pub use core::{
    Appender, AppenderMetrics, AtomicFlags, BufferPool, Flags, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, OutputTarget, Record, Result, Sink, FATAL_EXIT_CODE,
};
