//! Sink trait for log output destinations

use super::{error::Result, message::LogLine};

/// A destination the dispatcher writes formatted lines to.
///
/// Sinks are owned by the single dispatcher thread and never shared.
pub trait Sink: Send {
    fn append(&mut self, line: &LogLine<'_>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
