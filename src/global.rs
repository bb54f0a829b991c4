//! The process-wide scribe
//!
//! Programs that want a single pipeline for their whole lifetime can use
//! these functions instead of passing a [`Scribe`] around. The instance is
//! created on first use (stdout, [`LogLevel::Normal`]) unless one was
//! [`install`]ed before, and its dispatcher runs until the process exits.
//!
//! ```no_run
//! use scribe::{global, LogLevel, MessageType};
//!
//! global::set_level(LogLevel::Debug);
//! global::set_directory("/var/log/myserver").unwrap();
//! global::print(MessageType::Connect, LogLevel::Normal, "client 7");
//! scribe::request!(global::scribe(), LogLevel::Normal, "GET", "/index.html");
//! ```

use crate::core::{Content, LogLevel, MessageType, Result, Scribe};
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Scribe> = OnceLock::new();

/// Use `scribe` as the process-wide instance.
///
/// Fails, handing the scribe back, if the global instance already exists.
pub fn install(scribe: Scribe) -> std::result::Result<(), Scribe> {
    GLOBAL.set(scribe)
}

/// The process-wide instance, created with defaults on first use
///
/// # Panics
///
/// Panics if the dispatcher thread cannot be started.
pub fn scribe() -> &'static Scribe {
    GLOBAL.get_or_init(|| {
        Scribe::new().unwrap_or_else(|e| panic!("scribe: cannot start the global dispatcher: {e}"))
    })
}

pub fn set_level(level: LogLevel) {
    scribe().set_level(level);
}

pub fn level() -> LogLevel {
    scribe().level()
}

pub fn set_directory(directory: impl AsRef<Path>) -> Result<()> {
    scribe().set_directory(directory)
}

pub fn unset_directory() -> Result<()> {
    scribe().unset_directory()
}

pub fn print(kind: MessageType, level: LogLevel, content: impl Into<Content>) {
    scribe().print(kind, level, content);
}

pub fn progress(level: LogLevel, content: impl Into<Content>) {
    scribe().progress(level, content);
}

pub fn done(level: LogLevel, content: impl Into<Content>) {
    scribe().done(level, content);
}

pub fn info(level: LogLevel, content: impl Into<Content>) {
    scribe().info(level, content);
}

pub fn warning(level: LogLevel, content: impl Into<Content>) {
    scribe().warning(level, content);
}

pub fn error(level: LogLevel, content: impl Into<Content>) {
    scribe().error(level, content);
}

pub fn fatal(level: LogLevel, content: impl Into<Content>) {
    scribe().fatal(level, content);
}

pub fn request(level: LogLevel, content: impl Into<Content>) {
    scribe().request(level, content);
}

pub fn resolve(level: LogLevel, content: impl Into<Content>) {
    scribe().resolve(level, content);
}

pub fn connect(level: LogLevel, content: impl Into<Content>) {
    scribe().connect(level, content);
}

pub fn mount(level: LogLevel, content: impl Into<Content>) {
    scribe().mount(level, content);
}

pub fn disconnect(level: LogLevel, content: impl Into<Content>) {
    scribe().disconnect(level, content);
}

pub fn unmount(level: LogLevel, content: impl Into<Content>) {
    scribe().unmount(level, content);
}

pub fn bind(level: LogLevel, content: impl Into<Content>) {
    scribe().bind(level, content);
}

pub fn unbind(level: LogLevel, content: impl Into<Content>) {
    scribe().unbind(level, content);
}

/// Block until everything queued so far has been written
pub fn flush() -> Result<()> {
    scribe().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::ConsoleSink;

    #[test]
    fn test_install_then_use() {
        let quiet = Scribe::builder()
            .console(ConsoleSink::with_writer(std::io::sink()))
            .build()
            .unwrap();

        // Another test in this binary may have initialized it first
        let installed = install(quiet).is_ok();

        set_level(LogLevel::Debug);
        assert_eq!(level(), LogLevel::Debug);
        print(MessageType::Info, LogLevel::Debug, "global hello");
        connect(LogLevel::Normal, "client 7");
        flush().unwrap();

        if installed {
            assert_eq!(scribe().metrics().written(), 2);
        }

        let second = Scribe::builder()
            .console(ConsoleSink::with_writer(std::io::sink()))
            .build()
            .unwrap();
        assert!(install(second).is_err());
    }
}
