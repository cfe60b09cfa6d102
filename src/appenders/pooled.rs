//! Appender reusing scratch buffers from a pool

use crate::core::{
    formatter, Appender, AppenderMetrics, AtomicFlags, BufferPool, Flags, LoggerError, Record,
    Result, Sink,
};

/// Default appender: formats into a pooled buffer, then writes the whole line
/// with one sink call.
///
/// # Example
///
/// ```
/// use rust_logx::appenders::{MemorySink, PooledAppender};
/// use rust_logx::{Appender, Flags, LogLevel, Record};
///
/// let sink = MemorySink::new();
/// let appender = PooledAppender::new(sink.clone(), Flags::NONE);
/// appender.append(&Record::new(LogLevel::Info, "ready").with_prefix("db"));
///
/// assert_eq!(sink.contents(), "INFO db ready\n");
/// ```
#[derive(Debug)]
pub struct PooledAppender<S> {
    sink: S,
    flags: AtomicFlags,
    pool: BufferPool,
    metrics: AppenderMetrics,
}

impl<S: Sink> PooledAppender<S> {
    pub fn new(sink: S, flags: Flags) -> Self {
        Self::with_pool(sink, flags, BufferPool::new())
    }

    pub fn with_pool(sink: S, flags: Flags, pool: BufferPool) -> Self {
        Self {
            sink,
            flags: AtomicFlags::new(flags),
            pool,
            metrics: AppenderMetrics::new(),
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags.load()
    }

    /// Swap the flags; lines already being formatted keep the old set.
    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    pub fn metrics(&self) -> &AppenderMetrics {
        &self.metrics
    }
}

impl<S: Sink> Appender for PooledAppender<S> {
    fn append(&self, record: &Record<'_>) {
        let flags = self.flags.load();
        let time = formatter::capture_time(flags);

        let mut buf = self.pool.acquire();
        formatter::format_record(&mut buf, flags, time.as_ref(), record);

        match self.sink.write_line(&buf) {
            Ok(()) => self.metrics.record_written(buf.len()),
            Err(e) => self.metrics.report_failure(self.name(), &e),
        }
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush().map_err(LoggerError::from)
    }

    fn name(&self) -> &str {
        "pooled"
    }

    fn flags(&self) -> Flags {
        self.flags.load()
    }

    fn set_flags(&self, flags: Flags) {
        self.flags.store(flags);
    }
}
