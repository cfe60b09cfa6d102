//! Core logger types and traits

pub mod appender;
pub mod buffer_pool;
pub mod config;
pub mod error;
pub mod flags;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;

pub use appender::{Appender, Sink};
pub use buffer_pool::{BufferPool, PooledBuffer};
pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use flags::{AtomicFlags, Flags};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::AppenderMetrics;
pub use record::Record;
