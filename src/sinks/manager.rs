//! Sink manager: console fallback plus day-rotating log files
//!
//! The manager starts out writing to the console. Once a directory is set,
//! the first line of each new calendar day opens `<directory>/YYYY-MM-DD.log`
//! and the previous day's file is closed. A file that cannot be opened
//! leaves the previous sink in place.

use super::console::ConsoleSink;
use super::file::{daily_file_name, DailyFile};
use crate::core::{Result, ScribeError, ScribeMetrics, Sink};
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::Arc;

/// Called with the path of each daily file after it has been closed
pub type RotationHook = Arc<dyn Fn(&Path) + Send + Sync>;

/// Day number used to decide when to rotate. Counts days of the proleptic
/// Gregorian calendar, so it agrees with the date used in the file name
/// across leap years.
pub fn day_ordinal(day: NaiveDate) -> i32 {
    day.num_days_from_ce()
}

/// Make sure a directory path ends with a separator
pub fn normalize_directory(path: &Path) -> PathBuf {
    let mut text = path.as_os_str().to_os_string();
    let ends_with_separator = path
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(MAIN_SEPARATOR));
    if !ends_with_separator {
        text.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(text)
}

pub struct SinkManager {
    console: ConsoleSink,
    directory: Option<PathBuf>,
    current: Option<DailyFile>,
    previous_day: Option<i32>,
    /// File closed by `unset_directory`, reported to the rotation hook once
    /// its day is over or lines go to a different file
    parked: Option<(PathBuf, NaiveDate)>,
    on_rotate: Option<RotationHook>,
    metrics: Arc<ScribeMetrics>,
}

impl SinkManager {
    pub fn new(console: ConsoleSink, metrics: Arc<ScribeMetrics>) -> Self {
        Self {
            console,
            directory: None,
            current: None,
            previous_day: None,
            parked: None,
            on_rotate: None,
            metrics,
        }
    }

    #[must_use]
    pub fn with_rotation_hook(mut self, hook: RotationHook) -> Self {
        self.on_rotate = Some(hook);
        self
    }

    /// Start logging to daily files in `directory`. The next line opens
    /// today's file there.
    pub fn set_directory(&mut self, directory: &Path) {
        self.directory = Some(normalize_directory(directory));
        self.previous_day = None;
    }

    /// Go back to the console right away, closing any open daily file.
    ///
    /// The closed file may still be reopened today, so the rotation hook
    /// only sees it once its day has passed.
    pub fn unset_directory(&mut self) -> Result<()> {
        self.directory = None;
        self.previous_day = None;
        if let Some(file) = self.current.take() {
            let day = file.day();
            let path = self.close_file(file)?;
            if let Some((earlier, _)) = self.parked.replace((path, day)) {
                self.finish(&earlier);
            }
        }
        Ok(())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn is_logging_to_file(&self) -> bool {
        self.directory.is_some()
    }

    /// Path of the daily file currently receiving lines, if any
    pub fn current_file(&self) -> Option<&Path> {
        self.current.as_ref().map(DailyFile::path)
    }

    /// Return the sink the next line should go to, rotating first if
    /// `today` is later than the last day a file was opened for.
    ///
    /// Open and close failures are not fatal: they are pushed onto
    /// `problems` and the previous sink keeps receiving lines.
    pub fn ensure_current_sink(
        &mut self,
        today: NaiveDate,
        problems: &mut Vec<ScribeError>,
    ) -> &mut dyn Sink {
        if self.parked.as_ref().is_some_and(|(_, day)| *day < today) {
            if let Some((path, _)) = self.parked.take() {
                self.finish(&path);
            }
        }

        if let Some(directory) = self.directory.clone() {
            let ordinal = day_ordinal(today);
            if self.previous_day.map_or(true, |previous| ordinal > previous) {
                // One attempt per day; a failed open is retried tomorrow
                // or on the next set_directory
                self.previous_day = Some(ordinal);
                if let Err(e) = self.rotate(&directory, today) {
                    problems.push(e);
                }
            }
        }

        match self.current.as_mut() {
            Some(file) => file as &mut dyn Sink,
            None => &mut self.console,
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.current {
            file.flush()?;
        }
        self.console.flush()
    }

    fn rotate(&mut self, directory: &Path, today: NaiveDate) -> Result<()> {
        let target = directory.join(daily_file_name(today));
        // Same directory and day again: keep appending through the open handle
        if self.current.as_ref().is_some_and(|file| file.path() == target) {
            return Ok(());
        }

        let next = DailyFile::open(directory, today)
            .inspect_err(|_| self.metrics.record_sink_failure())?;
        self.metrics.record_rotation();

        if let Some((parked, _)) = self.parked.take() {
            if parked != target {
                self.finish(&parked);
            }
        }

        match self.current.replace(next) {
            Some(previous) => {
                let closed = self.close_file(previous)?;
                self.finish(&closed);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn close_file(&self, file: DailyFile) -> Result<PathBuf> {
        file.close().inspect_err(|_| self.metrics.record_sink_failure())
    }

    /// The file at `path` will not be written again
    fn finish(&self, path: &Path) {
        if let Some(ref hook) = self.on_rotate {
            hook(path);
        }
    }
}
