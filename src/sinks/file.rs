//! Daily log file sink

use crate::core::{LogLine, Result, ScribeError, Sink};
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name for one day's log: `YYYY-MM-DD.log`
pub fn daily_file_name(day: NaiveDate) -> String {
    day.format("%Y-%m-%d.log").to_string()
}

/// The open log file for a single calendar day. Lines are appended.
pub struct DailyFile {
    path: PathBuf,
    day: NaiveDate,
    writer: Option<BufWriter<File>>,
}

impl DailyFile {
    /// Open (creating if absent) `<directory>/<YYYY-MM-DD>.log` for appending
    pub fn open(directory: &Path, day: NaiveDate) -> Result<Self> {
        let path = directory.join(daily_file_name(day));

        fs::create_dir_all(directory).map_err(|e| ScribeError::file_open(&path, e))?;

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o660);
        }
        let file = options
            .open(&path)
            .map_err(|e| ScribeError::file_open(&path, e))?;

        Ok(Self {
            path,
            day,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Flush and release the file handle, returning the path of the
    /// completed file
    pub fn close(mut self) -> Result<PathBuf> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| ScribeError::file_close(&self.path, e.into_error()))?;
            file.sync_all()
                .map_err(|e| ScribeError::file_close(&self.path, e))?;
        }
        Ok(std::mem::take(&mut self.path))
    }
}

impl Sink for DailyFile {
    fn append(&mut self, line: &LogLine<'_>) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| ScribeError::writer("File writer not initialized"))?;

        writeln!(writer, "{}", line).map_err(|e| {
            ScribeError::io_operation(
                "writing log line",
                format!("cannot append to {}", self.path.display()),
                e,
            )
        })?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "daily-file"
    }
}

impl Drop for DailyFile {
    fn drop(&mut self) {
        // Best effort, errors during drop have nowhere to go
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
