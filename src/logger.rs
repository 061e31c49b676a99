//! Timestamped audit log
//!
//! Every line is `<YYYY-MM-DD HH:MM:SS> - <message>` in local time. The logger
//! owns its destination, so dropping it closes the log file. Only opening the
//! destination can fail; a write that fails later is reported on stderr and the
//! caller carries on.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::Path;

use crate::error::{CleanupError, Result};

/// Local-time format used for log line prefixes
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line-oriented log sink
pub struct Logger<W: Write> {
    writer: W,
    /// First failed write, reported once
    write_error: Option<CleanupError>,
}

impl<W: Write> Logger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_error: None,
        }
    }

    /// Write one timestamped line and flush it
    ///
    /// The first failure is printed to stderr; later lines are still attempted.
    pub fn log(&mut self, message: impl AsRef<str>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let written = writeln!(self.writer, "{} - {}", timestamp, message.as_ref())
            .and_then(|()| self.writer.flush());

        if let Err(e) = written {
            if self.write_error.is_none() {
                let err = CleanupError::LogWriteFailed {
                    reason: e.to_string(),
                };
                eprintln!("Warning: {}", err);
                self.write_error = Some(err);
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Logger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Logger<std::fs::File> {
    /// Open `path` for appending, creating it if missing
    pub fn append_to(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| CleanupError::LogFileOpenFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(file))
    }
}

impl Logger<Box<dyn Write>> {
    /// Log to `path` when given, stdout otherwise
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(path) => Box::new(Logger::append_to(path)?.writer),
            None => Box::new(Logger::stdout().writer),
        };
        Ok(Self::new(writer))
    }
}
