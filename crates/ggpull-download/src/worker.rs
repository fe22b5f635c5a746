//! Single-file download worker.
//!
//! The worker owns cloned `Arc` handles to the hub client and log sink, so
//! it can be moved into spawned tasks without borrowing from the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ggpull_core::{
    DownloadError, DownloadJob, DownloadResult, HubClientPort, JobOutcome, LogSink,
    ModelDescriptor,
};

use crate::integrity::verify_sha256;
use crate::options::DownloadOptions;
use crate::transfer::transfer_file;

/// Downloads files from the hub into target directories.
#[derive(Clone)]
pub struct Downloader {
    pub(crate) hub: Arc<dyn HubClientPort>,
    pub(crate) log: Arc<dyn LogSink>,
    pub(crate) options: DownloadOptions,
}

impl Downloader {
    pub fn new(
        hub: Arc<dyn HubClientPort>,
        log: Arc<dyn LogSink>,
        options: DownloadOptions,
    ) -> Self {
        Self { hub, log, options }
    }

    pub const fn options(&self) -> &DownloadOptions {
        &self.options
    }

    pub fn log_sink(&self) -> &Arc<dyn LogSink> {
        &self.log
    }

    pub fn hub(&self) -> &Arc<dyn HubClientPort> {
        &self.hub
    }

    /// Download one file into its target folder, which must already exist.
    ///
    /// 1. If the target exists, log and return `Skipped` without contacting the hub
    /// 2. Fetch the file into the hub cache
    /// 3. Optionally verify its SHA-256
    /// 4. Transfer it to the target path and log success
    ///
    /// Any failure is logged with the filename and returned as `Failed`.
    pub async fn download_file(&self, descriptor: &ModelDescriptor) -> JobOutcome {
        let target = descriptor.target_path();

        if target.exists() {
            self.log.log(&format!(
                "File already exists: {}. Skipping.",
                target.display()
            ));
            return JobOutcome::Skipped { target };
        }

        match self.fetch_and_place(descriptor, &target).await {
            Ok(()) => {
                self.log.log(&format!(
                    "Successfully downloaded and saved {} to {}",
                    descriptor.filename,
                    target.display()
                ));
                JobOutcome::Saved { target }
            }
            Err(error) => {
                self.log_failure(&descriptor.filename, &error);
                JobOutcome::Failed { error }
            }
        }
    }

    /// Drive a pending job through `Downloading` to its terminal state.
    pub async fn run_job(&self, mut job: DownloadJob) -> DownloadJob {
        job.begin();
        let outcome = self.download_file(job.descriptor()).await;
        tracing::debug!(
            filename = %job.descriptor().filename,
            state = %outcome.state(),
            "Job finished"
        );
        job.complete(outcome);
        job
    }

    pub(crate) fn log_failure(&self, filename: &str, error: &DownloadError) {
        self.log
            .log(&format!("Failed to download {filename}: {error}"));
    }

    async fn fetch_and_place(
        &self,
        descriptor: &ModelDescriptor,
        target: &Path,
    ) -> DownloadResult<()> {
        self.log
            .log(&format!("Starting download for {}", descriptor.filename));

        let fetched = self
            .hub
            .fetch_file(&descriptor.repo_id, &descriptor.filename)
            .await?;
        tracing::debug!(
            filename = %descriptor.filename,
            cache_path = %fetched.cache_path.display(),
            "Fetched into hub cache"
        );

        if self.options.verify {
            match fetched.sha256.clone() {
                Some(expected) => {
                    let path = fetched.cache_path.clone();
                    run_blocking(move || verify_sha256(&path, &expected)).await?;
                }
                None => tracing::debug!(
                    filename = %descriptor.filename,
                    "No content hash from hub, skipping verification"
                ),
            }
        }

        let mode = self.options.transfer;
        self.log.log(&format!(
            "{} {} to {}",
            mode.verb(),
            fetched.cache_path.display(),
            target.display()
        ));

        let source = fetched.cache_path;
        let destination: PathBuf = target.to_path_buf();
        run_blocking(move || {
            transfer_file(&source, &destination, mode).map_err(DownloadError::from)
        })
        .await
    }
}

/// Run blocking file work off the async workers.
async fn run_blocking<F>(f: F) -> DownloadResult<()>
where
    F: FnOnce() -> DownloadResult<()> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| DownloadError::task_aborted(e.to_string()))?
}
