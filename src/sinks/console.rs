//! Console sink implementation

use crate::core::{LogLine, Result, Sink};
use colored::Colorize;
use std::io::{self, Write};

/// Writes lines to standard output, or to any writer handed in.
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Send console output somewhere other than stdout
    ///
    /// # Example
    ///
    /// ```
    /// use scribe::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(std::io::stderr());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            use_colors: false,
        }
    }

    /// Color the glyph by message type
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn format_line(&self, line: &LogLine<'_>) -> String {
        if self.use_colors {
            format!(
                "{} {} {}\n",
                line.timestamp,
                line.kind.glyph().color(line.kind.color_code()),
                line.content
            )
        } else {
            format!("{}\n", line)
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, line: &LogLine<'_>) -> Result<()> {
        let output = self.format_line(line);
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Content, LogLevel, Message, MessageType};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_plain_line() {
        let capture = Capture::default();
        let mut sink = ConsoleSink::with_writer(capture.clone());
        let message = Message::new(
            MessageType::Connect,
            LogLevel::Normal,
            Content::new().with("client").with(7),
        );

        sink.append(&LogLine::new("2024/01/01 00:00:01", &message)).unwrap();
        sink.flush().unwrap();

        assert_eq!(capture.text(), "2024/01/01 00:00:01 --> client 7\n");
    }

    #[test]
    fn test_colored_glyph() {
        colored::control::set_override(true);
        let capture = Capture::default();
        let mut sink = ConsoleSink::with_writer(capture.clone()).with_colors(true);
        let message = Message::new(MessageType::Error, LogLevel::Error, "boom");

        sink.append(&LogLine::new("t", &message)).unwrap();
        colored::control::unset_override();

        let text = capture.text();
        assert!(text.contains("\u{1b}["), "expected ANSI escape in {:?}", text);
        assert!(text.contains("ERR"));
        assert!(text.ends_with(" boom\n"));
    }
}
