//! `ggpull fetch`: list, filter, then download concurrently.

use std::path::Path;

use anyhow::Result;
use ggpull_core::{BatchSummary, ModelDescriptor, ensure_directory};
use ggpull_download::fetch_model_files;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the fetch handler.
pub struct FetchArgs<'a> {
    pub repo_id: &'a str,
    pub quantization: &'a str,
    pub model_dir: &'a Path,
    pub dry_run: bool,
}

pub async fn execute(ctx: &CliContext, args: FetchArgs<'_>) -> Result<BatchSummary> {
    ctx.log("Starting GGUF model download process...");
    if !args.dry_run {
        ensure_directory(args.model_dir).map_err(CliError::from)?;
    }

    let files = fetch_model_files(ctx.hub(), ctx.log_sink(), args.repo_id, args.quantization).await;

    let summary = if files.is_empty() {
        ctx.log(&format!(
            "No files found for quantization level {}.",
            args.quantization
        ));
        BatchSummary::default()
    } else if args.dry_run {
        for file in &files {
            let target = ModelDescriptor::new(args.repo_id, file.as_str(), args.model_dir)
                .target_path();
            ctx.log(&format!("Would download {file} to {}", target.display()));
        }
        BatchSummary::default()
    } else {
        let jobs = ctx
            .downloader()
            .parallel_download(args.repo_id, &files, args.model_dir)
            .await;
        let summary = BatchSummary::from_jobs(&jobs);
        ctx.log(&summary.to_string());
        summary
    };

    ctx.log("GGUF model download process completed.");
    Ok(summary)
}
