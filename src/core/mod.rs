//! Core scribe types and traits

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod level_gate;
pub mod log_level;
pub mod message;
pub mod message_type;
pub mod metrics;
pub mod scribe;
pub mod sink;
pub mod timestamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ScribeConfig, DEFAULT_QUEUE_CAPACITY};
pub use dispatcher::{exit_process, FatalHook, FATAL_EXIT_CODE};
pub use error::{Result, ScribeError};
pub use level_gate::LevelGate;
pub use log_level::LogLevel;
pub use message::{Content, LogLine, Message};
pub use message_type::MessageType;
pub use metrics::ScribeMetrics;
pub use scribe::{Scribe, ScribeBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
