//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<BatchSummary>`
//! - Log the flow's start and end markers around the work
//! - Return the batch summary; `main` decides the exit code

pub mod fetch;
pub mod manifest;
