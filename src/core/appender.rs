//! Appender and sink traits
//!
//! An [`Appender`] turns a [`Record`] into one formatted line and hands it to
//! a [`Sink`]. Appenders are shared by many loggers and threads, so both
//! traits take `&self`.

use super::{error::Result, flags::Flags, record::Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub trait Appender: Send + Sync {
    /// Format `record` and write it as a single sink operation.
    ///
    /// Sink failures are not returned; logging never interrupts the caller.
    fn append(&self, record: &Record<'_>);

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// Format flags in effect. Appenders without flags report none.
    fn flags(&self) -> Flags {
        Flags::NONE
    }

    /// Swap the format flags. Ignored by appenders without flags.
    fn set_flags(&self, _flags: Flags) {}
}

/// Byte destination for formatted lines
pub trait Sink: Send + Sync {
    /// Write one complete line. Implementations must not interleave the
    /// bytes of concurrent calls.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Write + Send> Sink for Mutex<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<A: Appender + ?Sized> Appender for Arc<A> {
    fn append(&self, record: &Record<'_>) {
        (**self).append(record)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flags(&self) -> Flags {
        (**self).flags()
    }

    fn set_flags(&self, flags: Flags) {
        (**self).set_flags(flags)
    }
}
