//! Appender and sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod pooled;
pub mod simple;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;
pub use pooled::PooledAppender;
pub use simple::SimpleAppender;

pub use crate::core::{Appender, Sink};
