//! Appender allocating a fresh buffer per line

use crate::core::{
    formatter, Appender, AppenderMetrics, AtomicFlags, Flags, LoggerError, Record, Result, Sink,
};

/// Line capacity reserved up front besides the message itself
const LINE_OVERHEAD: usize = 64;

/// Same output as [`PooledAppender`](super::PooledAppender), without a pool.
#[derive(Debug)]
pub struct SimpleAppender<S> {
    sink: S,
    flags: AtomicFlags,
    metrics: AppenderMetrics,
}

impl<S: Sink> SimpleAppender<S> {
    pub fn new(sink: S, flags: Flags) -> Self {
        Self {
            sink,
            flags: AtomicFlags::new(flags),
            metrics: AppenderMetrics::new(),
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags.load()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn metrics(&self) -> &AppenderMetrics {
        &self.metrics
    }
}

impl<S: Sink> Appender for SimpleAppender<S> {
    fn append(&self, record: &Record<'_>) {
        let flags = self.flags.load();
        let time = formatter::capture_time(flags);

        let mut buf = Vec::with_capacity(
            LINE_OVERHEAD + record.prefix.len() + record.message.len(),
        );
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
        "simple"
    }

    fn flags(&self) -> Flags {
        self.flags.load()
    }

    fn set_flags(&self, flags: Flags) {
        self.flags.store(flags);
    }
}
