//! Download pipeline options.

use crate::transfer::TransferMode;

/// Default number of files downloaded at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Options shared by every job in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// How cached files are placed in the target directory.
    pub transfer: TransferMode,
    /// Verify SHA-256 against the hub's content hash when one is known.
    pub verify: bool,
    /// Maximum concurrent downloads in a batch (at least 1).
    pub max_concurrent: usize,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            transfer: TransferMode::Copy,
            verify: false,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl DownloadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_transfer(mut self, transfer: TransferMode) -> Self {
        self.transfer = transfer;
        self
    }

    #[must_use]
    pub const fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set the concurrency limit. Zero is clamped to 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }
}
