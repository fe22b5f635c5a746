//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the download pipeline expects from
//! infrastructure. They use only domain types.

pub mod hub;
pub mod log_sink;

pub use hub::{FetchedFile, HubClientPort, HubError, HubResult};
pub use log_sink::LogSink;
