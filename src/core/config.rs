//! Declarative logger configuration
//!
//! A [`LoggerConfig`] can be deserialized from JSON, adjusted from the
//! environment, and turned into a ready [`Logger`]:
//!
//! ```
//! use rust_logx::{Flags, LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(
//!     r#"{ "min_level": "debug", "flags": "date|time|shortfile", "prefix": "api" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.min_level, LogLevel::Debug);
//! assert_eq!(config.flags, Flags::DATE | Flags::TIME | Flags::SHORT_FILE);
//! let logger = config.build().unwrap();
//! assert_eq!(logger.prefix(), "api");
//! ```

use super::{
    appender::{Appender, Sink},
    error::{LoggerError, Result},
    flags::Flags,
    log_level::LogLevel,
    logger::Logger,
};
use crate::appenders::{ConsoleSink, FileSink, PooledAppender, SimpleAppender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Environment variable overriding the minimum level
pub const ENV_LEVEL: &str = "LOGX_LEVEL";
/// Environment variable overriding the format flags
pub const ENV_FLAGS: &str = "LOGX_FLAGS";
/// Environment variable overriding the output target
pub const ENV_OUTPUT: &str = "LOGX_OUTPUT";

/// Where lines are written: `"stdout"`, `"stderr"`, or a file path
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputTarget {
    Stdout,
    #[default]
    Stderr,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "" => Err(LoggerError::config("output", "target must not be empty")),
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            _ => Ok(OutputTarget::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl TryFrom<String> for OutputTarget {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OutputTarget> for String {
    fn from(target: OutputTarget) -> Self {
        target.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub flags: Flags,
    pub output: OutputTarget,
    /// Use the pooled appender rather than allocating per line
    pub pooled: bool,
    pub prefix: String,
    pub tags: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            flags: Flags::STD,
            output: OutputTarget::Stderr,
            pooled: true,
            prefix: String::new(),
            tags: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `LOGX_LEVEL`, `LOGX_FLAGS` and `LOGX_OUTPUT` if set.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.min_level = level.parse()?;
        }
        if let Some(flags) = lookup(ENV_FLAGS) {
            self.flags = flags.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = output.parse()?;
        }
        Ok(self)
    }

    /// Open the configured output and wrap it in the configured appender.
    pub fn build_appender(&self) -> Result<Arc<dyn Appender>> {
        Ok(match &self.output {
            OutputTarget::Stdout => self.wrap(ConsoleSink::stdout()),
            OutputTarget::Stderr => self.wrap(ConsoleSink::stderr()),
            OutputTarget::File(path) => self.wrap(FileSink::new(path.clone())?),
        })
    }

    fn wrap<S: Sink + 'static>(&self, sink: S) -> Arc<dyn Appender> {
        if self.pooled {
            Arc::new(PooledAppender::new(sink, self.flags))
        } else {
            Arc::new(SimpleAppender::new(sink, self.flags))
        }
    }

    pub fn build(&self) -> Result<Logger> {
        Ok(Logger::builder()
            .prefix(self.prefix.clone())
            .tags(self.tags.iter().cloned())
            .min_level(self.min_level)
            .shared_appender(self.build_appender()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.flags, Flags::STD);
        assert_eq!(config.output, OutputTarget::Stderr);
        assert!(config.pooled);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LoggerConfig::from_json(r#"{ "pooled": false, "tags": ["a", "b"] }"#).unwrap();
        assert!(!config.pooled);
        assert_eq!(config.tags, vec!["a", "b"]);
        assert_eq!(config.flags, Flags::STD);
    }

    #[test]
    fn test_invalid_json_values() {
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "min_level": "loud" }"#),
            Err(LoggerError::JsonError(_))
        ));
        assert!(LoggerConfig::from_json(r#"{ "flags": "date|sparkles" }"#).is_err());
        assert!(LoggerConfig::from_json(r#"{ "output": "" }"#).is_err());
        assert!(LoggerConfig::from_json(r#"{ "colour": true }"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_LEVEL, "warning"),
            (ENV_FLAGS, "time|utc"),
            (ENV_OUTPUT, "stdout"),
        ]
        .into_iter()
        .collect();

        let config = LoggerConfig::new()
            .with_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.min_level, LogLevel::Warning);
        assert_eq!(config.flags, Flags::TIME | Flags::UTC);
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_bad_override_is_error() {
        let result = LoggerConfig::new().with_overrides_from(|key| {
            (key == ENV_LEVEL).then(|| "chatty".to_string())
        });
        assert!(matches!(result, Err(LoggerError::InvalidLevel(_))));
    }

    #[test]
    fn test_output_target_parse() {
        assert_eq!("STDOUT".parse::<OutputTarget>().unwrap(), OutputTarget::Stdout);
        assert_eq!(
            "/tmp/app.log".parse::<OutputTarget>().unwrap(),
            OutputTarget::File(PathBuf::from("/tmp/app.log"))
        );
        assert!("  ".parse::<OutputTarget>().is_err());
    }

    #[test]
    fn test_build_selects_appender() {
        let pooled = LoggerConfig::new().build().unwrap();
        assert_eq!(pooled.appender().name(), "pooled");

        let simple = LoggerConfig {
            pooled: false,
            ..LoggerConfig::default()
        }
        .build()
        .unwrap();
        assert_eq!(simple.appender().name(), "simple");
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = LoggerConfig {
            min_level: LogLevel::Critical,
            flags: Flags::DATE | Flags::COMPACT,
            output: OutputTarget::File(PathBuf::from("app.log")),
            pooled: false,
            prefix: "svc".to_string(),
            tags: vec!["t".to_string()],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"date|compact\""));
        assert_eq!(LoggerConfig::from_json(&json).unwrap(), config);
    }
}
