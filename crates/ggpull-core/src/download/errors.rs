//! Download error types.
//!
//! These errors carry only strings so an outcome can be cloned, compared and
//! printed after the worker that produced it is gone. For I/O errors, we
//! capture the kind and message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::HubError;

/// Why a single file could not be placed in its target directory.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadError {
    /// The hub client failed to fetch the file into its cache.
    #[error("{message}")]
    Hub {
        /// Error text reported by the hub client.
        message: String,
    },

    /// I/O error while transferring the cached file.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "`NotFound`", "`PermissionDenied`").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// The cached file's SHA-256 does not match the hub's content hash.
    #[error("Integrity check failed: expected {expected}, got {actual}")]
    IntegrityFailed {
        /// Expected checksum.
        expected: String,
        /// Actual checksum computed.
        actual: String,
    },

    /// The worker task ended without reporting an outcome.
    #[error("Download task aborted: {message}")]
    TaskAborted {
        /// Panic or join error text.
        message: String,
    },
}

impl DownloadError {
    /// Create an I/O error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create an integrity check failed error.
    pub fn integrity_failed(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::IntegrityFailed {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a task aborted error.
    pub fn task_aborted(message: impl Into<String>) -> Self {
        Self::TaskAborted {
            message: message.into(),
        }
    }
}

impl From<HubError> for DownloadError {
    fn from(err: HubError) -> Self {
        Self::Hub {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io_error(&err)
    }
}

/// Convenience result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;
