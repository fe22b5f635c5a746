//! Core domain types and ports for ggpull.
//!
//! This crate holds everything the download pipeline shares without knowing
//! about a concrete hub client or terminal:
//!
//! - `download` - model descriptors, per-job state, outcomes and batch summaries
//! - `ports` - the `HubClientPort` and `LogSink` abstractions
//! - `logging` - concrete log sinks (append-only file, in-memory)
//! - `paths` - directory setup

#![deny(unused_crate_dependencies)]

pub mod download;
pub mod logging;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use download::{
    BatchSummary, DownloadError, DownloadJob, DownloadResult, JobOutcome, JobState,
    ModelDescriptor,
};
pub use logging::{FileLogSink, LogSinkError, MemoryLogSink};
pub use paths::{PathError, ensure_directory, verify_writable};
pub use ports::{FetchedFile, HubClientPort, HubError, HubResult, LogSink};

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
