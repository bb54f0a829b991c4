//! Process-wide level threshold shared by every producer

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};

/// Decides whether a message is accepted into the queue.
///
/// Producers read the gate without locking; a producer racing a
/// `set_level` may see the previous value for a moment.
#[derive(Debug)]
pub struct LevelGate {
    level: AtomicU8,
}

impl LevelGate {
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Replace the threshold for all messages enqueued from now on
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Release);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::try_from(self.level.load(Ordering::Acquire)).unwrap_or(LogLevel::None)
    }

    /// `true` when a message at `level` passes the current threshold.
    ///
    /// This is `level >= gate` with one exception: a gate at
    /// [`LogLevel::None`] rejects everything, including messages emitted at
    /// `None`, so that `None` always means no output.
    #[inline]
    pub fn should_enqueue(&self, level: LogLevel) -> bool {
        let gate = self.level();
        gate != LogLevel::None && level >= gate
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gate_is_normal() {
        let gate = LevelGate::default();
        assert_eq!(gate.level(), LogLevel::Normal);
        assert!(!gate.should_enqueue(LogLevel::Debug));
        assert!(gate.should_enqueue(LogLevel::Normal));
        assert!(gate.should_enqueue(LogLevel::Error));
    }

    #[test]
    fn test_set_level() {
        let gate = LevelGate::new(LogLevel::Debug);
        assert!(gate.should_enqueue(LogLevel::Debug));

        gate.set_level(LogLevel::Error);
        assert!(!gate.should_enqueue(LogLevel::Normal));
        assert!(gate.should_enqueue(LogLevel::Error));
    }

    #[test]
    fn test_none_disables_everything() {
        let gate = LevelGate::new(LogLevel::None);
        for level in LogLevel::ALL {
            assert!(!gate.should_enqueue(level), "{level} passed a closed gate");
        }
    }
}
