//! Descriptors, jobs and outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::DownloadError;

/// One file to fetch from the hub and where to put it.
///
/// Field names match the manifest format
/// (`{"repo_id": ..., "filename": ..., "target_folder": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Hub repository ID (e.g., `lmstudio-community/Llama-3.3-70B-Instruct-GGUF`).
    pub repo_id: String,
    /// Path of the file inside the repository.
    pub filename: String,
    /// Local directory the file is placed in.
    pub target_folder: PathBuf,
}

impl ModelDescriptor {
    pub fn new(
        repo_id: impl Into<String>,
        filename: impl Into<String>,
        target_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_id: repo_id.into(),
            filename: filename.into(),
            target_folder: target_folder.into(),
        }
    }

    /// Final location of the file: target folder plus the base name.
    ///
    /// Repository subdirectories are flattened, so `Q8_0/model-Q8_0.gguf`
    /// lands at `<target_folder>/model-Q8_0.gguf`.
    pub fn target_path(&self) -> PathBuf {
        let base = Path::new(&self.filename)
            .file_name()
            .map_or_else(|| self.filename.clone().into(), PathBuf::from);
        self.target_folder.join(base)
    }
}

/// Processing state of a download job.
///
/// `Pending` → `Downloading` → one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Pending,
    Downloading,
    Skipped,
    Saved,
    Failed,
}

impl JobState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Skipped | Self::Saved | Self::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Downloading => "downloading",
            Self::Skipped => "skipped",
            Self::Saved => "saved",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// How a single download ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The target already existed; nothing was fetched or written.
    Skipped { target: PathBuf },
    /// The file was fetched and placed at `target`.
    Saved { target: PathBuf },
    /// The download failed; the error was logged.
    Failed { error: DownloadError },
}

impl JobOutcome {
    /// Terminal job state corresponding to this outcome.
    #[must_use]
    pub const fn state(&self) -> JobState {
        match self {
            Self::Skipped { .. } => JobState::Skipped,
            Self::Saved { .. } => JobState::Saved,
            Self::Failed { .. } => JobState::Failed,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A descriptor plus its processing state for one run.
#[derive(Debug, Clone)]
pub struct DownloadJob {
    descriptor: ModelDescriptor,
    state: JobState,
    outcome: Option<JobOutcome>,
}

impl DownloadJob {
    /// Create a pending job.
    pub const fn new(descriptor: ModelDescriptor) -> Self {
        Self {
            descriptor,
            state: JobState::Pending,
            outcome: None,
        }
    }

    pub const fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    pub const fn state(&self) -> JobState {
        self.state
    }

    /// The outcome, once the job has reached a terminal state.
    pub const fn outcome(&self) -> Option<&JobOutcome> {
        self.outcome.as_ref()
    }

    /// Move a pending job to `Downloading`.
    pub fn begin(&mut self) {
        debug_assert_eq!(self.state, JobState::Pending);
        self.state = JobState::Downloading;
    }

    /// Record the outcome and move to the matching terminal state.
    pub fn complete(&mut self, outcome: JobOutcome) {
        debug_assert!(!self.state.is_terminal(), "job completed twice");
        self.state = outcome.state();
        self.outcome = Some(outcome);
    }
}

/// Aggregate of all job outcomes in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Filenames of the failed jobs, in job order.
    pub failed_files: Vec<String>,
}

impl BatchSummary {
    /// Summarize finished jobs. Jobs without an outcome count as failed.
    pub fn from_jobs<'a>(jobs: impl IntoIterator<Item = &'a DownloadJob>) -> Self {
        let mut summary = Self::default();
        for job in jobs {
            match job.outcome() {
                Some(JobOutcome::Saved { .. }) => summary.saved += 1,
                Some(JobOutcome::Skipped { .. }) => summary.skipped += 1,
                Some(JobOutcome::Failed { .. }) | None => {
                    summary.failed += 1;
                    summary.failed_files.push(job.descriptor().filename.clone());
                }
            }
        }
        summary
    }

    pub const fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }

    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {} saved, {} skipped, {} failed.",
            self.saved, self.skipped, self.failed
        )
    }
}
