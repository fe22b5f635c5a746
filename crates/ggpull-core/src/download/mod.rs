//! Download domain types and errors.
//!
//! Pure data types for the download pipeline. No I/O, networking, or
//! runtime dependencies allowed.
//!
//! - `types` - descriptors, jobs, outcomes and the batch summary
//! - `errors` - per-file download failures

pub mod errors;
pub mod types;

pub use errors::{DownloadError, DownloadResult};
pub use types::{BatchSummary, DownloadJob, JobOutcome, JobState, ModelDescriptor};
