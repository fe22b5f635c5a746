//! Directory setup for the log and target directories.
//!
//! - Returns `PathError` for clear error handling
//! - No interactive/terminal I/O

mod ensure;
mod error;

pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
