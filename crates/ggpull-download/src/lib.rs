//! Download pipeline for ggpull.
//!
//! - `lister` - hub listing and quantization filtering
//! - `worker` - single-file download (skip, fetch, verify, transfer)
//! - `fanout` - sequential and bounded-concurrency batch execution
//! - `transfer` - copy/move policy from the hub cache to the target directory
//! - `integrity` - SHA-256 verification
//!
//! Every per-file failure is caught, logged to the injected `LogSink`, and
//! returned as a `JobOutcome::Failed`; nothing here propagates a download
//! error to the caller.

#![deny(unused_crate_dependencies)]

mod fanout;
mod integrity;
mod lister;
mod options;
mod transfer;
mod worker;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use integrity::sha256_file;
pub use lister::{GGUF_EXTENSION, fetch_model_files, filter_quantized_files};
pub use options::{DEFAULT_MAX_CONCURRENT, DownloadOptions};
pub use transfer::{TransferMode, transfer_file};
pub use worker::Downloader;

// Re-export core types for convenience
pub use ggpull_core::{BatchSummary, DownloadError, DownloadJob, JobOutcome, JobState, ModelDescriptor};

#[cfg(test)]
use mockall as _;
