//! Appender metrics for observability
//!
//! Writing a line never reports an error to the caller, so these counters are
//! the only place sink failures become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// How often a persisting write failure is reported on stderr
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// Counters kept by every appender
///
/// # Example
///
/// ```
/// use rust_logx::AppenderMetrics;
///
/// let metrics = AppenderMetrics::new();
/// metrics.record_written(12);
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.bytes_written(), 12);
/// ```
#[derive(Debug)]
pub struct AppenderMetrics {
    /// Lines handed to the sink successfully
    lines_written: AtomicU64,

    /// Bytes handed to the sink successfully
    bytes_written: AtomicU64,

    /// Lines the sink refused
    write_failures: AtomicU64,
}

impl AppenderMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record one line of `bytes` length
    #[inline]
    pub fn record_written(&self, bytes: usize) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Count a failed write and alert on the first one and periodically after.
    pub(crate) fn report_failure(&self, appender: &str, err: &std::io::Error) {
        let previous = self.record_failure();
        if previous == 0 || (previous + 1).is_multiple_of(FAILURE_REPORT_INTERVAL) {
            eprintln!(
                "[LOGGER ERROR] Appender '{}' failed to write ({} failures so far): {}",
                appender,
                previous + 1,
                err
            );
        }
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.bytes_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for AppenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AppenderMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            bytes_written: AtomicU64::new(self.bytes_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
