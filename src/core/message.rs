//! Message structure and its rendered line

use super::log_level::LogLevel;
use super::message_type::MessageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The printable payload of a message: an ordered list of values, each
/// already rendered to text, joined with single spaces when written.
///
/// # Example
///
/// ```
/// use scribe::Content;
///
/// let content = Content::new().with("user").with(42).with("logged in");
/// assert_eq!(content.to_string(), "user 42 logged in");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content(Vec<String>);

impl Content {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one value, rendered through its `Display` implementation
    #[must_use]
    pub fn with(mut self, value: impl fmt::Display) -> Self {
        self.push(value);
        self
    }

    pub fn push(&mut self, value: impl fmt::Display) {
        self.0.push(Self::sanitize(&value.to_string()));
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Escape backslashes and control characters so one message is always
    /// one line and an escape in the output always means the same input
    fn sanitize(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                '\u{2028}' | '\u{2029}' => escaped.extend(c.escape_unicode()),
                c if c.is_control() => escaped.extend(c.escape_unicode()),
                c => escaped.push(c),
            }
        }
        escaped
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            f.write_str(first)?;
            for value in values {
                f.write_str(" ")?;
                f.write_str(value)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::new().with(value)
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::new().with(value)
    }
}

impl From<&[&dyn fmt::Display]> for Content {
    fn from(values: &[&dyn fmt::Display]) -> Self {
        values.iter().fold(Content::new(), |content, value| content.with(value))
    }
}

impl<T: fmt::Display> FromIterator<T> for Content {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Content::new(), |content, value| content.with(value))
    }
}

/// One log event on its way through the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageType,
    pub level: LogLevel,
    pub content: Content,
}

impl Message {
    pub fn new(kind: MessageType, level: LogLevel, content: impl Into<Content>) -> Self {
        Self {
            kind,
            level,
            content: content.into(),
        }
    }
}

/// A message as it is written: `<timestamp> <glyph> <content>`
#[derive(Debug, Clone, Copy)]
pub struct LogLine<'a> {
    pub timestamp: &'a str,
    pub kind: MessageType,
    pub content: &'a Content,
}

impl<'a> LogLine<'a> {
    pub fn new(timestamp: &'a str, message: &'a Message) -> Self {
        Self {
            timestamp,
            kind: message.kind,
            content: &message.content,
        }
    }
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.timestamp, self.kind.glyph(), self.content)
    }
}
