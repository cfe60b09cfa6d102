//! Logging macros: the formatted variants of the logger methods.
//!
//! Each macro takes either a logger followed by `format!`-style arguments,
//! or only the format arguments, in which case the line goes to the
//! process-wide default logger.
//!
//! # Examples
//!
//! ```
//! use rust_logx::prelude::*;
//! use rust_logx::info;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(Arc::new(PooledAppender::new(sink.clone(), Flags::NONE)));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(sink.lines(), ["INFO Server started", "INFO Server listening on port 8080"]);
//! ```

/// Log a message at an explicit level.
///
/// Arguments are only rendered when the level is enabled.
///
/// ```
/// # use rust_logx::prelude::*;
/// # let logger = Logger::builder().appender(PooledAppender::new(MemorySink::new(), Flags::NONE)).build();
/// use rust_logx::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Trace, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Debug, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_logx::prelude::*;
/// # let logger = Logger::builder().appender(PooledAppender::new(MemorySink::new(), Flags::NONE)).build();
/// use rust_logx::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
///
/// // Without a logger the line goes to the default logger
/// info!("{} workers ready", 4);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Info, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Warning, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Error, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().log_fmt($crate::LogLevel::Critical, ::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log at FATAL and exit the process. Does not return.
///
/// ```no_run
/// # use rust_logx::prelude::*;
/// # let logger = Logger::default();
/// use rust_logx::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().fatal(::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

/// Log at PANIC, then panic with the same message.
///
/// ```should_panic
/// # use rust_logx::prelude::*;
/// # let logger = Logger::builder().appender(PooledAppender::new(MemorySink::new(), Flags::NONE)).build();
/// use rust_logx::log_panic;
/// log_panic!(logger, "invariant broken: {} < {}", 3, 2);
/// ```
#[macro_export]
macro_rules! log_panic {
    ($fmt:literal $($rest:tt)*) => {
        $crate::global::logger().panic(::std::format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(::std::format_args!($($arg)+))
    };
}
