//! One log record as handed from a logger to its appender

use super::log_level::LogLevel;
use std::panic::Location;

#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub prefix: &'a str,
    pub tags: &'a [String],
    pub message: &'a str,
    /// Call site of the logging method, `None` when unknown
    pub location: Option<&'static Location<'static>>,
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            prefix: "",
            tags: &[],
            message,
            location: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_tags(mut self, tags: &'a [String]) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }
}
