//! Download log sink port.
//!
//! The download log is the user-visible record of a run: one plain-text line
//! per event, shared by every worker. Implementations live in
//! `crate::logging`.

/// Port for appending lines to the download log.
///
/// Implementations must be thread-safe and must write each line whole, so
/// concurrent workers interleave at line granularity only.
pub trait LogSink: Send + Sync {
    /// Append one message (without trailing newline).
    fn log(&self, message: &str);
}
