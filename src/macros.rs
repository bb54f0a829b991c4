//! Emit macros taking any number of printable values.
//!
//! Each value is rendered with `Display` and the values are joined with
//! single spaces, so `info!(scribe, level, "took", 42, "ms")` writes
//! `(i) took 42 ms`.
//!
//! # Examples
//!
//! ```
//! use scribe::prelude::*;
//! use scribe::{info, warning};
//!
//! let scribe = Scribe::builder()
//!     .console(ConsoleSink::with_writer(std::io::sink()))
//!     .build()
//!     .unwrap();
//!
//! let port = 8080;
//! info!(scribe, LogLevel::Normal, "listening on port", port);
//! warning!(scribe, LogLevel::Normal, "disk", 93, "% full");
//! ```

/// Queue a message of any type.
///
/// # Examples
///
/// ```
/// # use scribe::prelude::*;
/// # let scribe = Scribe::builder().console(ConsoleSink::with_writer(std::io::sink())).build().unwrap();
/// use scribe::emit;
/// emit!(scribe, MessageType::Bind, LogLevel::Normal, "socket", "0.0.0.0:80");
/// emit!(scribe, MessageType::Done, LogLevel::Normal);
/// ```
#[macro_export]
macro_rules! emit {
    ($scribe:expr, $kind:expr, $level:expr $(,)?) => {
        $scribe.print($kind, $level, $crate::Content::new())
    };
    ($scribe:expr, $kind:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $scribe.print($kind, $level, $crate::Content::new()$(.with(&$arg))+)
    };
}

/// Log a step of an overall task.
#[macro_export]
macro_rules! progress {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Progress, $level $(, $arg)*)
    };
}

/// Log the successful completion of a task.
#[macro_export]
macro_rules! done {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Done, $level $(, $arg)*)
    };
}

/// Log an informational message.
///
/// # Examples
///
/// ```
/// # use scribe::prelude::*;
/// # let scribe = Scribe::builder().console(ConsoleSink::with_writer(std::io::sink())).build().unwrap();
/// use scribe::info;
/// info!(scribe, LogLevel::Normal, "cache warmed in", 120, "ms");
/// ```
#[macro_export]
macro_rules! info {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Info, $level $(, $arg)*)
    };
}

/// Log a problem that did not cause an error.
#[macro_export]
macro_rules! warning {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Warning, $level $(, $arg)*)
    };
}

/// Log an operation that ran into a problem.
#[macro_export]
macro_rules! error {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Error, $level $(, $arg)*)
    };
}

/// Log an irrecoverable failure. The fatal hook runs once it is written.
#[macro_export]
macro_rules! fatal {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Fatal, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! request {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Request, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! resolve {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Resolve, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! connect {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Connect, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! mount {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Mount, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! disconnect {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Disconnect, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! unmount {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Unmount, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! bind {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Bind, $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! unbind {
    ($scribe:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::emit!($scribe, $crate::MessageType::Unbind, $level $(, $arg)*)
    };
}
