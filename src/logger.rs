//! Append-only run log
//!
//! Every diagnostic of a run funnels through one [`RunLog`]. The driver
//! owns it for the duration of the run and lends it (`&mut`) to the
//! components that need to record something.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use time::OffsetDateTime;

use crate::error::Error;
use crate::util::format_timestamp;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => f.write_str("INFO"),
            LogLevel::Error => f.write_str("ERROR"),
        }
    }
}

/// Source of record timestamps
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local timezone, UTC when the offset is unknown
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Which prefixes a log line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStyle {
    pub timestamps: bool,
    pub levels: bool,
}

impl Default for LogStyle {
    fn default() -> Self {
        Self {
            timestamps: true,
            levels: true,
        }
    }
}

/// Line-oriented log sink: `<timestamp> - <LEVEL>: <message>`
pub struct RunLog<W: Write = BufWriter<File>> {
    sink: W,
    style: LogStyle,
    clock: Box<dyn Clock>,
}

impl RunLog {
    /// Open `path` for appending, creating it if needed. Never truncates.
    pub fn open(path: &Path, style: LogStyle) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(RunLog::new(BufWriter::new(file), style))
    }
}

impl<W: Write> RunLog<W> {
    pub fn new(sink: W, style: LogStyle) -> Self {
        Self::with_clock(sink, style, Box::new(LocalClock))
    }

    pub fn with_clock(sink: W, style: LogStyle, clock: Box<dyn Clock>) -> Self {
        Self { sink, style, clock }
    }

    pub fn info(&mut self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    pub fn error(&mut self, message: &str) {
        self.record(LogLevel::Error, message);
    }

    /// Append one record. Write failures are dropped: logging must not
    /// abort the run.
    pub fn record(&mut self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        let _ = writeln!(self.sink, "{}", line);
        let _ = self.sink.flush();
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        let mut line = String::new();
        if self.style.timestamps {
            line.push_str(&format_timestamp(self.clock.now()));
            line.push_str(" - ");
        }
        if self.style.levels {
            line.push_str(&format!("{}: ", level));
        }
        line.push_str(message);
        line
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }
}

impl<W: Write> Drop for RunLog<W> {
    fn drop(&mut self) {
        let _ = self.sink.flush();
    }
}
