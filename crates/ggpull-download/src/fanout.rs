//! Batch execution over many descriptors.

use std::path::Path;
use std::sync::Arc;

use ggpull_core::{DownloadError, DownloadJob, JobOutcome, ModelDescriptor};
use tokio::sync::Semaphore;

use crate::worker::Downloader;

impl Downloader {
    /// Download each descriptor in turn, waiting for one before starting the next.
    pub async fn download_sequential(
        &self,
        descriptors: impl IntoIterator<Item = ModelDescriptor>,
    ) -> Vec<DownloadJob> {
        let mut jobs = Vec::new();
        for descriptor in descriptors {
            jobs.push(self.run_job(DownloadJob::new(descriptor)).await);
        }
        jobs
    }

    /// Download every descriptor on its own task.
    ///
    /// At most `max_concurrent` downloads run at once. Returns after every
    /// task has finished, with the jobs in input order. A task that panics
    /// is reported as a failed job for its file.
    pub async fn download_all(
        &self,
        descriptors: impl IntoIterator<Item = ModelDescriptor>,
    ) -> Vec<DownloadJob> {
        let semaphore = Arc::new(Semaphore::new(self.options.max_concurrent));

        let handles: Vec<_> = descriptors
            .into_iter()
            .map(|descriptor| {
                let downloader = self.clone();
                let semaphore = Arc::clone(&semaphore);
                let job = DownloadJob::new(descriptor.clone());
                let handle = tokio::spawn(async move {
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(e) => {
                            let mut job = job;
                            job.begin();
                            job.complete(JobOutcome::Failed {
                                error: DownloadError::task_aborted(e.to_string()),
                            });
                            return job;
                        }
                    };
                    downloader.run_job(job).await
                });
                (descriptor, handle)
            })
            .collect();

        tracing::debug!(
            tasks = handles.len(),
            max_concurrent = self.options.max_concurrent,
            "Spawned download tasks"
        );

        let mut jobs = Vec::with_capacity(handles.len());
        for (descriptor, handle) in handles {
            match handle.await {
                Ok(job) => jobs.push(job),
                Err(e) => {
                    let error = DownloadError::task_aborted(e.to_string());
                    self.log_failure(&descriptor.filename, &error);
                    let mut job = DownloadJob::new(descriptor);
                    job.begin();
                    job.complete(JobOutcome::Failed { error });
                    jobs.push(job);
                }
            }
        }
        jobs
    }

    /// Download `filenames` from one repository into `target_dir` concurrently.
    pub async fn parallel_download(
        &self,
        repo_id: &str,
        filenames: &[String],
        target_dir: &Path,
    ) -> Vec<DownloadJob> {
        let descriptors = filenames
            .iter()
            .map(|filename| ModelDescriptor::new(repo_id, filename.as_str(), target_dir))
            .collect::<Vec<_>>();
        self.download_all(descriptors).await
    }
}
