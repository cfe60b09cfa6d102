//! Error types for the logger system
//!
//! Only construction and configuration can fail. Writing a log line never
//! returns an error to the caller.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File sink could not be opened
    #[error("File sink error for '{path}': {message}")]
    FileSinkError { path: String, message: String },

    /// Unknown severity level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Unknown format flag name
    #[error("Invalid format flag: '{0}'")]
    InvalidFlag(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileSinkError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    pub fn invalid_flag(name: impl Into<String>) -> Self {
        LoggerError::InvalidFlag(name.into())
    }
}
