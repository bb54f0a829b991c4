//! Output destinations and the day-rotating sink manager

pub mod console;
pub mod file;
pub mod manager;

pub use console::ConsoleSink;
pub use file::{daily_file_name, DailyFile};
pub use manager::{day_ordinal, normalize_directory, RotationHook, SinkManager};

pub use crate::core::Sink;
