//! ggpull command-line adapter.
//!
//! `bootstrap` wires the hub client, log sink and downloader together;
//! `handlers` run the two download flows against a `CliContext`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
