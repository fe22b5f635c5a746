//! CLI-specific error types and mappings.
//!
//! Maps setup failures and failed batches to exit codes.

use ggpull_core::{HubError, LogSinkError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (directory setup, log file, manifest read).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (hub client, manifest contents).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The run finished but some files were not placed.
    #[error("{failed} of {total} downloads failed: {}", files.join(", "))]
    DownloadsFailed {
        failed: usize,
        total: usize,
        files: Vec<String>,
    },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (some downloads failed)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DownloadsFailed { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::EmptyPath => Self::Arguments(err.to_string()),
            _ => Self::Io(err.to_string()),
        }
    }
}

impl From<LogSinkError> for CliError {
    fn from(err: LogSinkError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<HubError> for CliError {
    fn from(err: HubError) -> Self {
        match err {
            HubError::Configuration { .. } => Self::Config(err.to_string()),
            HubError::Cache { .. } => Self::Io(err.to_string()),
            HubError::NotFound { .. } | HubError::Request { .. } => {
                Self::Arguments(err.to_string())
            }
        }
    }
}

/// Exit code for an error returned from `main`'s run loop.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
