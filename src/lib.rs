//! # Scribe
//!
//! An asynchronous, leveled logging pipeline. Any number of threads emit
//! typed messages; a single background dispatcher writes them, one line
//! each, to the console or to a log file that rotates every calendar day.
//!
//! ```text
//! 2024/01/01 10:00:00 (i) server listening on 8080
//! 2024/01/01 10:00:02 --> client 7 connected
//! 2024/01/01 10:00:03 !!! disk low
//! ```
//!
//! ## Features
//!
//! - **Level gate**: messages below the current level are dropped before
//!   they reach the queue
//! - **Backpressure**: a bounded queue blocks producers instead of losing
//!   messages
//! - **Daily files**: `<directory>/YYYY-MM-DD.log`, appended to, one per day
//! - **Self-reporting**: sink failures become ordinary `ERR` lines
//!
//! ## Example
//!
//! ```no_run
//! use scribe::prelude::*;
//!
//! let scribe = Scribe::new().unwrap();
//! scribe.set_directory("/var/log/myserver").unwrap();
//! scribe.info(LogLevel::Normal, "server started");
//! scribe::connect!(scribe, LogLevel::Normal, "client", 7, "connected");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Clock, Content, LogLevel, ManualClock, Message, MessageType, Result, Scribe,
        ScribeBuilder, ScribeConfig, ScribeError, ScribeMetrics, SystemClock, TimestampFormat,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{ConsoleSink, RotationHook};
}

pub use crate::core::{
    exit_process, Clock, Content, FatalHook, LevelGate, LogLevel, LogLine, ManualClock, Message,
    MessageType, Result, Scribe, ScribeBuilder, ScribeConfig, ScribeError, ScribeMetrics, Sink,
    SystemClock, TimestampFormat, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
    FATAL_EXIT_CODE,
};
pub use sinks::{ConsoleSink, RotationHook};
