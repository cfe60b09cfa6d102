//! Logger handle
//!
//! A [`Logger`] binds a prefix and a tag list to a replaceable appender.
//! The appender cell is read lock-free on every call and can be swapped at
//! any time with [`Logger::set_appender`]; readers never see a half-written
//! reference.

use super::{
    appender::Appender, error::Result, flags::Flags, log_level::LogLevel, record::Record,
};
use crate::appenders::{ConsoleSink, PooledAppender};
use arc_swap::ArcSwap;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit status used by [`Logger::fatal`] and [`Logger::on_fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

pub struct Logger {
    prefix: String,
    tags: Vec<String>,
    appender: ArcSwap<Arc<dyn Appender>>,
    min_level: AtomicU8,
}

impl Logger {
    /// Logger with no prefix or tags writing to `appender`
    pub fn new(appender: Arc<dyn Appender>) -> Self {
        Self::from_parts(String::new(), Vec::new(), appender, LogLevel::Info)
    }

    fn from_parts(
        prefix: String,
        tags: Vec<String>,
        appender: Arc<dyn Appender>,
        min_level: LogLevel,
    ) -> Self {
        Self {
            prefix,
            tags,
            appender: ArcSwap::from_pointee(appender),
            min_level: AtomicU8::new(min_level.as_u8()),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logx::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder()
    ///     .prefix("api")
    ///     .tag("eu-west")
    ///     .min_level(LogLevel::Debug)
    ///     .appender(PooledAppender::new(sink.clone(), Flags::NONE))
    ///     .build();
    ///
    /// logger.debug("warming caches");
    /// assert_eq!(sink.contents(), "DEBUG api [eu-west] warming caches\n");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The appender currently installed
    pub fn appender(&self) -> Arc<dyn Appender> {
        (**self.appender.load()).clone()
    }

    /// Replace the appender. Calls already in flight finish on the old one.
    pub fn set_appender(&self, appender: Arc<dyn Appender>) {
        self.appender.store(Arc::new(appender));
    }

    /// Format flags of the installed appender
    pub fn flags(&self) -> Flags {
        self.appender.load().flags()
    }

    /// Swap the installed appender's format flags. Every logger sharing that
    /// appender sees the change.
    pub fn set_flags(&self, flags: Flags) {
        self.appender.load().set_flags(flags);
    }

    pub fn min_level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    /// Drop everything below `level`. TRACE and DEBUG are off by default.
    pub fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level.as_u8(), Ordering::Relaxed);
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.as_u8() >= self.min_level.load(Ordering::Relaxed)
    }

    /// Derive a logger with its own prefix and no tags.
    ///
    /// The child starts from this logger's current appender and minimum level
    /// but owns a separate appender cell: later `set_appender` calls on either
    /// logger do not affect the other.
    pub fn child(&self, prefix: impl Into<String>) -> Logger {
        self.child_with_tags(prefix, std::iter::empty::<String>())
    }

    /// Like [`Logger::child`], with tags.
    pub fn child_with_tags<I, T>(&self, prefix: impl Into<String>, tags: I) -> Logger
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Logger {
            prefix: prefix.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            appender: ArcSwap::new(self.appender.load_full()),
            min_level: AtomicU8::new(self.min_level.load(Ordering::Relaxed)),
        }
    }

    /// Render `message` and hand it to the appender if `level` is enabled.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let location = Location::caller();
        self.dispatch(level, &message.to_string(), location);
    }

    /// Formatted variant used by the logging macros.
    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let location = Location::caller();
        match args.as_str() {
            Some(message) => self.dispatch(level, message, location),
            None => self.dispatch(level, &args.to_string(), location),
        }
    }

    fn dispatch(&self, level: LogLevel, message: &str, location: &'static Location<'static>) {
        let record = Record {
            level,
            prefix: &self.prefix,
            tags: &self.tags,
            message,
            location: Some(location),
        };
        self.appender.load().append(&record);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(LogLevel::Critical, message);
    }

    /// Log at FATAL, flush, and exit the process with status 1.
    ///
    /// This does not return and skips destructors. Not for hot paths.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(LogLevel::Fatal, message);
        self.exit_fatal()
    }

    /// Log at PANIC, then panic with the same message.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.log(LogLevel::Panic, &message);
        panic!("{}", message)
    }

    /// Log `message` at WARNING if `result` is an error, prefixed by the
    /// error text. The result is returned unchanged.
    #[track_caller]
    pub fn on_warning<T, E: fmt::Display>(
        &self,
        result: std::result::Result<T, E>,
        message: impl fmt::Display,
    ) -> std::result::Result<T, E> {
        if let Err(ref err) = result {
            self.log_condition(LogLevel::Warning, err, message);
        }
        result
    }

    /// Log `message` at ERROR if `result` is an error, prefixed by the error
    /// text. The result is returned unchanged, so this composes with `?`:
    ///
    /// ```
    /// # use rust_logx::prelude::*;
    /// # fn load() -> std::result::Result<u32, std::io::Error> {
    /// #     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
    /// # }
    /// # fn run(logger: &Logger) -> std::result::Result<u32, std::io::Error> {
    /// let value = logger.on_error(load(), "while loading settings")?;
    /// # Ok(value)
    /// # }
    /// # let sink = MemorySink::new();
    /// # let logger = Logger::new(std::sync::Arc::new(PooledAppender::new(sink.clone(), Flags::NONE)));
    /// # assert!(run(&logger).is_err());
    /// # assert_eq!(sink.contents(), "ERROR no such file while loading settings\n");
    /// ```
    #[track_caller]
    pub fn on_error<T, E: fmt::Display>(
        &self,
        result: std::result::Result<T, E>,
        message: impl fmt::Display,
    ) -> std::result::Result<T, E> {
        if let Err(ref err) = result {
            self.log_condition(LogLevel::Error, err, message);
        }
        result
    }

    #[track_caller]
    pub fn on_critical<T, E: fmt::Display>(
        &self,
        result: std::result::Result<T, E>,
        message: impl fmt::Display,
    ) -> std::result::Result<T, E> {
        if let Err(ref err) = result {
            self.log_condition(LogLevel::Critical, err, message);
        }
        result
    }

    /// Unwrap `result`, or log at FATAL and exit the process.
    #[track_caller]
    pub fn on_fatal<T, E: fmt::Display>(
        &self,
        result: std::result::Result<T, E>,
        message: impl fmt::Display,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                self.log_condition(LogLevel::Fatal, &err, message);
                self.exit_fatal()
            }
        }
    }

    /// Unwrap `result`, or log at PANIC and panic with the logged text.
    #[track_caller]
    pub fn on_panic<T, E: fmt::Display>(
        &self,
        result: std::result::Result<T, E>,
        message: impl fmt::Display,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                let text = condition_text(&err, message);
                self.log(LogLevel::Panic, &text);
                panic!("{}", text)
            }
        }
    }

    #[track_caller]
    fn log_condition(&self, level: LogLevel, err: &dyn fmt::Display, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let text = condition_text(err, message);
        self.log(level, &text);
    }

    fn exit_fatal(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.load().flush()
    }
}

/// `"<error> <message>"`, or just the error text for an empty message
fn condition_text(err: &dyn fmt::Display, message: impl fmt::Display) -> String {
    let message = message.to_string();
    if message.is_empty() {
        err.to_string()
    } else {
        format!("{} {}", err, message)
    }
}

impl Default for Logger {
    /// Pooled appender on stderr with [`Flags::STD`]
    fn default() -> Self {
        Self::new(Arc::new(PooledAppender::new(ConsoleSink::stderr(), Flags::STD)))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("tags", &self.tags)
            .field("min_level", &self.min_level())
            .field("appender", &self.appender.load().name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_logx::prelude::*;
///
/// let logger = Logger::builder()
///     .prefix("worker")
///     .tags(["batch", "nightly"])
///     .min_level(LogLevel::Warning)
///     .appender(PooledAppender::new(ConsoleSink::stderr(), Flags::DATE | Flags::TIME))
///     .build();
///
/// assert_eq!(logger.tags(), ["batch", "nightly"]);
/// ```
pub struct LoggerBuilder {
    prefix: String,
    tags: Vec<String>,
    min_level: LogLevel,
    appender: Option<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            tags: Vec::new(),
            min_level: LogLevel::Info,
            appender: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add one tag
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add several tags, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Arc::new(appender));
        self
    }

    /// Use an appender that is already shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Build the Logger. Without an appender, lines go to stderr.
    pub fn build(self) -> Logger {
        let appender = self.appender.unwrap_or_else(|| {
            Arc::new(PooledAppender::new(ConsoleSink::stderr(), Flags::STD))
        });
        Logger::from_parts(self.prefix, self.tags, appender, self.min_level)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{MemorySink, SimpleAppender};
    use std::sync::atomic::AtomicUsize;

    fn memory_logger(flags: Flags) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::new(Arc::new(PooledAppender::new(sink.clone(), flags)));
        (logger, sink)
    }

    struct CountingDisplay<'a>(&'a AtomicUsize);

    impl fmt::Display for CountingDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::Relaxed);
            f.write_str("rendered")
        }
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.prefix(), "");
        assert!(logger.tags().is_empty());
        assert_eq!(logger.min_level(), LogLevel::Info);
        assert_eq!(logger.appender().name(), "pooled");
    }

    #[test]
    fn test_severity_methods() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.set_min_level(LogLevel::Trace);

        logger.trace("t");
        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        assert_eq!(
            sink.lines(),
            vec!["TRACE t", "DEBUG d", "INFO i", "WARNING w", "ERROR e", "CRITICAL c"]
        );
    }

    #[test]
    fn test_below_min_level_is_not_rendered() {
        let (logger, sink) = memory_logger(Flags::NONE);
        let renders = AtomicUsize::new(0);

        logger.debug(CountingDisplay(&renders));
        assert_eq!(renders.load(Ordering::Relaxed), 0);
        assert!(sink.is_empty());

        logger.set_min_level(LogLevel::Debug);
        logger.debug(CountingDisplay(&renders));
        assert_eq!(renders.load(Ordering::Relaxed), 1);
        assert_eq!(sink.contents(), "DEBUG rendered\n");
    }

    #[test]
    fn test_log_fmt_static_and_dynamic() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.log_fmt(LogLevel::Info, format_args!("plain"));
        logger.log_fmt(LogLevel::Info, format_args!("port {}", 8080));
        assert_eq!(sink.lines(), vec!["INFO plain", "INFO port 8080"]);
    }

    #[test]
    fn test_caller_location_is_call_site() {
        let (logger, sink) = memory_logger(Flags::SHORT_FILE);
        let expected_line = line!() + 1;
        logger.info("started");
        assert_eq!(sink.contents(), format!("INFO logger.rs:{} started\n", expected_line));
    }

    #[test]
    fn test_set_appender_redirects() {
        let (logger, first) = memory_logger(Flags::NONE);
        logger.info("one");

        let second = MemorySink::new();
        logger.set_appender(Arc::new(SimpleAppender::new(second.clone(), Flags::NONE)));
        logger.info("two");

        assert_eq!(first.lines(), vec!["INFO one"]);
        assert_eq!(second.lines(), vec!["INFO two"]);
        assert_eq!(logger.appender().name(), "simple");
    }

    #[test]
    fn test_set_flags_through_logger() {
        let (logger, sink) = memory_logger(Flags::NONE);
        let child = logger.child("worker");
        logger.info("before");

        logger.set_flags(Flags::SHORT_FILE);
        assert_eq!(logger.flags(), Flags::SHORT_FILE);
        assert_eq!(child.flags(), Flags::SHORT_FILE);

        let expected_line = line!() + 1;
        logger.info("after");
        child.info("shared");

        let lines = sink.lines();
        assert_eq!(lines[0], "INFO before");
        assert_eq!(lines[1], format!("INFO logger.rs:{} after", expected_line));
        assert!(lines[2].starts_with("INFO worker logger.rs:"));
    }

    #[test]
    fn test_set_flags_follows_current_appender() {
        let (logger, first) = memory_logger(Flags::NONE);
        let second = MemorySink::new();
        logger.set_appender(Arc::new(SimpleAppender::new(second.clone(), Flags::NONE)));

        logger.set_flags(Flags::COMPACT);
        logger.info("a   b");

        assert!(first.is_empty());
        assert_eq!(second.contents(), "INFO a b\n");
    }

    #[test]
    fn test_child_snapshots_parent_appender() {
        let (parent, original) = memory_logger(Flags::NONE);
        let parent = parent.child("root");
        let child = parent.child_with_tags("child", ["x", "y"]);

        let replacement = MemorySink::new();
        parent.set_appender(Arc::new(PooledAppender::new(replacement.clone(), Flags::NONE)));

        child.info("from child");
        parent.info("from parent");

        assert_eq!(original.lines(), vec!["INFO child [x y] from child"]);
        assert_eq!(replacement.lines(), vec!["INFO root from parent"]);
    }

    #[test]
    fn test_child_swap_does_not_touch_parent() {
        let (parent, original) = memory_logger(Flags::NONE);
        let child = parent.child("child");
        child.set_appender(Arc::new(PooledAppender::new(MemorySink::new(), Flags::NONE)));

        parent.info("still here");
        assert_eq!(original.lines(), vec!["INFO still here"]);
    }

    #[test]
    fn test_child_inherits_min_level() {
        let (parent, sink) = memory_logger(Flags::NONE);
        parent.set_min_level(LogLevel::Error);
        let child = parent.child("c");
        assert_eq!(child.min_level(), LogLevel::Error);

        child.warning("dropped");
        child.error("kept");
        assert_eq!(sink.lines(), vec!["ERROR c kept"]);
    }

    #[test]
    fn test_guard_helpers_pass_through() {
        let (logger, sink) = memory_logger(Flags::NONE);

        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(logger.on_error(ok, "never logged"), Ok(7));
        assert!(sink.is_empty());

        let err: std::result::Result<u32, String> = Err("timeout".to_string());
        assert_eq!(
            logger.on_warning(err.clone(), "talking to cache"),
            Err("timeout".to_string())
        );
        assert_eq!(logger.on_error(err.clone(), ""), Err("timeout".to_string()));
        assert!(logger.on_critical(err, "giving up").is_err());

        assert_eq!(
            sink.lines(),
            vec![
                "WARNING timeout talking to cache",
                "ERROR timeout",
                "CRITICAL timeout giving up"
            ]
        );
    }

    #[test]
    fn test_guard_respects_min_level() {
        let (logger, sink) = memory_logger(Flags::NONE);
        logger.set_min_level(LogLevel::Error);
        let err: std::result::Result<(), &str> = Err("minor");
        assert!(logger.on_warning(err, "ignored").is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_on_fatal_ok_returns_value() {
        let (logger, sink) = memory_logger(Flags::NONE);
        let ok: std::result::Result<&str, String> = Ok("config");
        assert_eq!(logger.on_fatal(ok, "unreachable"), "config");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_on_panic_logs_then_panics() {
        let (logger, sink) = memory_logger(Flags::NONE);
        let err: std::result::Result<(), &str> = Err("corrupt index");

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.on_panic(err, "during replay");
        }));

        let payload = outcome.unwrap_err();
        let text = payload.downcast_ref::<String>().cloned().unwrap_or_default();
        assert_eq!(text, "corrupt index during replay");
        assert_eq!(sink.contents(), "PANIC corrupt index during replay\n");
    }

    #[test]
    #[should_panic(expected = "invariant broken")]
    fn test_panic_method() {
        let (logger, _sink) = memory_logger(Flags::NONE);
        logger.panic("invariant broken");
    }

    #[test]
    fn test_debug_output() {
        let (logger, _sink) = memory_logger(Flags::NONE);
        let rendered = format!("{:?}", logger.child_with_tags("svc", ["a"]));
        assert!(rendered.contains("svc"));
        assert!(rendered.contains("pooled"));
    }
}
