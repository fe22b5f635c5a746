//! `ggpull manifest`: download a fixed list, one file at a time.

use std::collections::BTreeSet;

use anyhow::Result;
use ggpull_core::{BatchSummary, ModelDescriptor, ensure_directory};

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext, descriptors: Vec<ModelDescriptor>) -> Result<BatchSummary> {
    ctx.log("Download script started.");

    let folders: BTreeSet<_> = descriptors.iter().map(|d| d.target_folder.clone()).collect();
    for folder in &folders {
        ensure_directory(folder).map_err(CliError::from)?;
    }

    let jobs = ctx.downloader().download_sequential(descriptors).await;
    let summary = BatchSummary::from_jobs(&jobs);
    ctx.log(&summary.to_string());

    ctx.log("Download script finished.");
    Ok(summary)
}
