//! Timestamp formatting for log lines
//!
//! Stamps are local wall-clock times taken from the scribe's clock at the
//! moment a line is written.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use scribe::TimestampFormat;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(10, 30, 45)
///     .unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2024/01/01 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Date and time to the second: `2024/01/01 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds: `2024-01-01T10:30:45.123`
    Iso8601,

    /// ISO 8601 with microseconds: `2024-01-01T10:30:45.123456`
    Iso8601Micros,

    /// Custom strftime format
    ///
    /// ```
    /// use scribe::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, at: &NaiveDateTime) -> String {
        match self {
            TimestampFormat::Standard => at.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601Micros => at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            TimestampFormat::Custom(format_str) => at.format(format_str).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .unwrap()
            .and_hms_micro_opt(10, 30, 45, 123_456)
            .unwrap()
    }

    #[test]
    fn test_standard_format() {
        assert_eq!(TimestampFormat::Standard.format(&sample()), "2025/01/08 10:30:45");
    }

    #[test]
    fn test_iso8601_formats() {
        assert_eq!(
            TimestampFormat::Iso8601.format(&sample()),
            "2025-01-08T10:30:45.123"
        );
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&sample()),
            "2025-01-08T10:30:45.123456"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%H:%M".to_string());
        assert_eq!(format.format(&sample()), "10:30");
    }

    #[test]
    fn test_serde_names() {
        let format: TimestampFormat = serde_json::from_str("\"iso8601\"").unwrap();
        assert_eq!(format, TimestampFormat::Iso8601);
        let format: TimestampFormat = serde_json::from_str("{\"custom\":\"%H\"}").unwrap();
        assert_eq!(format, TimestampFormat::Custom("%H".to_string()));
    }
}
