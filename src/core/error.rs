//! Error types for the scribe pipeline

use std::path::Path;

pub type Result<T> = std::result::Result<T, ScribeError>;

#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Daily log file could not be opened
    #[error("could not open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Daily log file could not be closed cleanly
    #[error("could not close log file '{path}': {source}")]
    FileClose {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A message type index with no glyph
    #[error("unknown message type: {0}")]
    UnknownMessageType(u8),

    /// A message type name that does not exist
    #[error("unknown message type name: '{0}'")]
    UnknownMessageTypeName(String),

    /// A log level name or index that does not exist
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// The dispatcher is no longer running
    #[error("Scribe already stopped")]
    Stopped,

    /// Channel receive error
    #[error("Failed to receive acknowledgement from dispatcher")]
    ChannelReceiveError,
}

impl ScribeError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        ScribeError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        ScribeError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a log file open error
    pub fn file_open(path: &Path, source: std::io::Error) -> Self {
        ScribeError::FileOpen {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a log file close error
    pub fn file_close(path: &Path, source: std::io::Error) -> Self {
        ScribeError::FileClose {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        ScribeError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ScribeError::config("ScribeBuilder", "queue capacity must be non-zero");
        assert!(matches!(err, ScribeError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ScribeError::file_open(Path::new("/var/log/2024-01-01.log"), io_err);
        assert!(matches!(err, ScribeError::FileOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = ScribeError::file_open(Path::new("/logs/2024-01-01.log"), io_err);
        assert_eq!(
            err.to_string(),
            "could not open log file '/logs/2024-01-01.log': no such directory"
        );

        assert_eq!(
            ScribeError::UnknownMessageType(42).to_string(),
            "unknown message type: 42"
        );
        assert_eq!(
            ScribeError::InvalidLevel("loud".into()).to_string(),
            "Invalid log level: 'loud'"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = ScribeError::io_operation("reading config", "cannot read scribe.json", io_err);

        assert!(matches!(err, ScribeError::IoOperation { .. }));
        assert!(err.to_string().contains("reading config"));
        assert!(err.to_string().contains("cannot read scribe.json"));
    }
}
