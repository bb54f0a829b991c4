//! Message types and their display glyphs

use super::error::ScribeError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a logged event. Each type is printed with a fixed
/// three-character glyph in front of the message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// A step of an overall task
    Progress = 0,
    /// Successful completion of a task
    Done = 1,
    /// General observations worth reading later
    Info = 2,
    /// A problem that did not cause an error
    Warning = 3,
    /// An operation hit a problem and halted
    Error = 4,
    /// A thread, channel, or the whole program had to stop
    Fatal = 5,
    /// An external request made by a client
    Request = 6,
    /// A client request resolved successfully
    Resolve = 7,
    /// A client connected
    Connect = 8,
    /// A client mounted
    Mount = 9,
    /// A client disconnected
    Disconnect = 10,
    /// A client unmounted
    Unmount = 11,
    Bind = 12,
    Unbind = 13,
}

impl MessageType {
    pub const ALL: [MessageType; 14] = [
        MessageType::Progress,
        MessageType::Done,
        MessageType::Info,
        MessageType::Warning,
        MessageType::Error,
        MessageType::Fatal,
        MessageType::Request,
        MessageType::Resolve,
        MessageType::Connect,
        MessageType::Mount,
        MessageType::Disconnect,
        MessageType::Unmount,
        MessageType::Bind,
        MessageType::Unbind,
    ];

    /// The three-character prefix printed for this type
    pub const fn glyph(self) -> &'static str {
        match self {
            MessageType::Progress => "...",
            MessageType::Done => ".//",
            MessageType::Info => "(i)",
            MessageType::Warning => "!!!",
            MessageType::Error => "ERR",
            MessageType::Fatal => "XXX",
            MessageType::Request => "->?",
            MessageType::Resolve => "->!",
            MessageType::Connect => "-->",
            MessageType::Mount => "-=E",
            MessageType::Disconnect => "<--",
            MessageType::Unmount => "X=-",
            MessageType::Bind => "=#=",
            MessageType::Unbind => "=X=",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            MessageType::Progress => "progress",
            MessageType::Done => "done",
            MessageType::Info => "info",
            MessageType::Warning => "warning",
            MessageType::Error => "error",
            MessageType::Fatal => "fatal",
            MessageType::Request => "request",
            MessageType::Resolve => "resolve",
            MessageType::Connect => "connect",
            MessageType::Mount => "mount",
            MessageType::Disconnect => "disconnect",
            MessageType::Unmount => "unmount",
            MessageType::Bind => "bind",
            MessageType::Unbind => "unbind",
        }
    }

    /// Glyph color used by the console sink when colors are enabled
    pub fn color_code(&self) -> Color {
        use Color::*;
        match self {
            MessageType::Progress => BrightBlack,
            MessageType::Done => Green,
            MessageType::Info => Blue,
            MessageType::Warning => Yellow,
            MessageType::Error => Red,
            MessageType::Fatal => BrightRed,
            MessageType::Request | MessageType::Resolve => Cyan,
            MessageType::Connect | MessageType::Mount => Magenta,
            MessageType::Disconnect | MessageType::Unmount => BrightMagenta,
            MessageType::Bind | MessageType::Unbind => BrightCyan,
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = ScribeError;

    fn try_from(value: u8) -> Result<Self, ScribeError> {
        MessageType::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ScribeError::UnknownMessageType(value))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for MessageType {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        MessageType::ALL
            .into_iter()
            .find(|kind| kind.to_str() == lowered)
            .ok_or_else(|| ScribeError::UnknownMessageTypeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_type_has_a_three_character_glyph() {
        for kind in MessageType::ALL {
            assert_eq!(kind.glyph().chars().count(), 3, "{kind} glyph");
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: HashSet<_> = MessageType::ALL.iter().map(|k| k.glyph()).collect();
        assert_eq!(glyphs.len(), MessageType::ALL.len());
    }

    #[test]
    fn test_all_matches_discriminants() {
        for (index, kind) in MessageType::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        assert_eq!(MessageType::try_from(2).unwrap(), MessageType::Info);
        assert!(matches!(
            MessageType::try_from(14),
            Err(ScribeError::UnknownMessageType(14))
        ));
    }

    #[test]
    fn test_name_parse() {
        assert_eq!("Warning".parse::<MessageType>().unwrap(), MessageType::Warning);
        assert_eq!("unbind".parse::<MessageType>().unwrap(), MessageType::Unbind);
        assert!("shout".parse::<MessageType>().is_err());
    }
}
