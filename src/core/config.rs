//! File-based configuration
//!
//! A `ScribeConfig` can be loaded from JSON and handed to
//! [`ScribeBuilder::config`](crate::ScribeBuilder::config):
//!
//! ```
//! use scribe::{LogLevel, ScribeConfig};
//!
//! let config = ScribeConfig::from_json_str(r#"{ "level": "debug", "queue_capacity": 64 }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.queue_capacity, 64);
//! assert!(config.directory.is_none());
//! ```

use super::error::{Result, ScribeError};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of messages the queue holds before producers block
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScribeConfig {
    /// Initial level gate
    pub level: LogLevel,
    /// Write daily files here instead of the console
    pub directory: Option<PathBuf>,
    pub queue_capacity: usize,
    pub timestamp_format: TimestampFormat,
    /// Color glyphs on the console
    pub colors: bool,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Normal,
            directory: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            timestamp_format: TimestampFormat::Standard,
            colors: false,
        }
    }
}

impl ScribeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ScribeError::io_operation(
                "reading configuration",
                format!("cannot read {}", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(ScribeError::config(
                "queue_capacity",
                "the queue must hold at least one message",
            ));
        }
        if let Some(ref directory) = self.directory {
            validate_directory(directory)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_directory(directory: &Path) -> Result<()> {
    if directory.as_os_str().is_empty() {
        return Err(ScribeError::config("directory", "log directory must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ScribeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ScribeConfig::default());
        assert_eq!(config.queue_capacity, 16);
    }

    #[test]
    fn test_full_config() {
        let config = ScribeConfig::from_json_str(
            r#"{
                "level": "error",
                "directory": "/var/log/scribe",
                "queue_capacity": 4,
                "timestamp_format": "iso8601",
                "colors": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.directory, Some(PathBuf::from("/var/log/scribe")));
        assert_eq!(config.queue_capacity, 4);
        assert_eq!(config.timestamp_format, TimestampFormat::Iso8601);
        assert!(config.colors);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = ScribeConfig::from_json_str(r#"{ "queue_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ScribeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_empty_directory() {
        let err = ScribeConfig::from_json_str(r#"{ "directory": "" }"#).unwrap_err();
        assert!(matches!(err, ScribeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = ScribeConfig::from_json_str(r#"{ "compress": true }"#).unwrap_err();
        assert!(matches!(err, ScribeError::JsonError(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scribe.json");
        fs::write(&path, r#"{ "level": "debug" }"#).unwrap();

        let config = ScribeConfig::from_path(&path).unwrap();
        assert_eq!(config.level, LogLevel::Debug);

        let err = ScribeConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScribeError::IoOperation { .. }));
    }
}
