//! Log level definitions

use super::error::ScribeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How important a message is. Ordered by selectivity: a gate set to a
/// level lets through that level and everything above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Any and all information, for debugging
    Debug = 0,
    /// Requests, connections, and errors
    #[default]
    Normal = 1,
    /// Errors only
    Error = 2,
    /// Nothing at all
    None = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Normal,
        LogLevel::Error,
        LogLevel::None,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Normal => "NORMAL",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ScribeError;

    fn try_from(value: u8) -> Result<Self, ScribeError> {
        match value {
            0 => Ok(LogLevel::Debug),
            1 => Ok(LogLevel::Normal),
            2 => Ok(LogLevel::Error),
            3 => Ok(LogLevel::None),
            other => Err(ScribeError::InvalidLevel(other.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "NORMAL" | "INFO" => Ok(LogLevel::Normal),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" | "OFF" => Ok(LogLevel::None),
            _ => Err(ScribeError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::None);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(LogLevel::default(), LogLevel::Normal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Normal);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_try_from_index() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::try_from(level.as_u8()).unwrap(), level);
        }
        assert!(matches!(
            LogLevel::try_from(4),
            Err(ScribeError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LogLevel::Normal).unwrap();
        assert_eq!(json, "\"normal\"");
        let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }
}
