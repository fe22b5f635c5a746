//! `HuggingFace` Hub adapter for ggpull.
//!
//! Implements the core-owned `HubClientPort` on top of the `hf-hub` crate.
//! External code should construct an `HfHubClient` and use it through the
//! port trait.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod cache;
mod client;
mod config;
mod error;

// ============================================================================
// Public API
// ============================================================================

pub use client::HfHubClient;
pub use config::{DEFAULT_REVISION, HfClientConfig};

#[cfg(test)]
use tempfile as _;
