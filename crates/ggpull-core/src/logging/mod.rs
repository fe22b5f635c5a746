//! Log sink implementations.
//!
//! - `FileLogSink` - append-only log file, opened once per process, echoed to stdout
//! - `MemoryLogSink` - collects lines in memory (tests)

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::ports::LogSink;

/// Failure to open the download log.
#[derive(Debug, Error)]
#[error("Failed to open log file {path}: {source}")]
pub struct LogSinkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Append-only download log backed by a single file handle.
///
/// The file is opened in append mode when the sink is created and closed when
/// it is dropped. Existing content is never truncated.
#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
    file: Mutex<File>,
    echo: bool,
}

impl FileLogSink {
    /// Open (or create) the log file for appending.
    ///
    /// The parent directory must already exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogSinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogSinkError {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            echo: true,
        })
    }

    /// Disable echoing each line to stdout.
    #[must_use]
    pub const fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }
}

/// Write one echoed line; a closed or full stdout is reported, never fatal.
fn echo_line(out: &mut impl Write, message: &str) {
    if let Err(e) = writeln!(out, "{message}") {
        tracing::warn!(error = %e, "Failed to echo download log line");
    }
}

impl LogSink for FileLogSink {
    fn log(&self, message: &str) {
        {
            let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
            // Single write per line so concurrent appends never split a line.
            let line = format!("{message}\n");
            let result = file.write_all(line.as_bytes());
            if let Err(e) = result.and_then(|()| file.flush()) {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to append to download log");
            }
        }

        if self.echo {
            echo_line(&mut io::stdout().lock(), message);
        }
    }
}

/// In-memory log sink.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines logged so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any logged line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
