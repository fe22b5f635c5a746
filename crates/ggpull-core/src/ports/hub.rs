//! Model hub client port.
//!
//! The implementation lives in `ggpull-hf`. Tests use in-memory fakes.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from hub port operations.
///
/// Client-specific errors (HTTP, cache I/O) are mapped to these at the
/// adapter boundary.
#[derive(Debug, Error)]
pub enum HubError {
    /// The repository or file does not exist, or is gated.
    #[error("Not found on hub: {what}")]
    NotFound {
        /// Repository ID or `repo/filename`.
        what: String,
    },

    /// The request to the hub failed.
    #[error("Hub request failed: {message}")]
    Request {
        /// Description of the failure.
        message: String,
    },

    /// The local cache could not be written or read.
    #[error("Hub cache error: {message}")]
    Cache {
        /// Description of the failure.
        message: String,
    },

    /// The client could not be constructed.
    #[error("Hub client configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },
}

/// Result type alias for hub port operations.
pub type HubResult<T> = Result<T, HubError>;

/// A file that the hub client has placed in its local cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// Path of the cached copy.
    pub cache_path: PathBuf,
    /// Lowercase hex SHA-256 of the content, when the hub exposes one.
    pub sha256: Option<String>,
}

impl FetchedFile {
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
            sha256: None,
        }
    }

    #[must_use]
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }
}

/// Port trait for model hub operations.
///
/// # Design
///
/// - Async methods for network operations
/// - Returns `HubError` for all failures
/// - Caching and deduplication are the implementation's responsibility
#[async_trait]
pub trait HubClientPort: Send + Sync {
    /// List every file path in a repository, in the order the hub returns them.
    async fn list_repo_files(&self, repo_id: &str) -> HubResult<Vec<String>>;

    /// Fetch one file into the local cache and return its cached location.
    async fn fetch_file(&self, repo_id: &str, filename: &str) -> HubResult<FetchedFile>;
}
