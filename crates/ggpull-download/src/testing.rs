//! In-memory hub for tests.
//!
//! `FakeHub` serves listings and file contents configured up front and
//! materializes fetched files in a private temporary cache directory. It
//! counts calls and records the peak number of concurrent fetches.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ggpull_core::{FetchedFile, HubClientPort, HubError, HubResult};
use sha2::{Digest, Sha256};
use tempfile::TempDir;

/// Test double for `HubClientPort`.
pub struct FakeHub {
    cache: TempDir,
    repos: HashMap<String, Vec<(String, Vec<u8>)>>,
    listing_error: Option<String>,
    failing_fetches: HashSet<String>,
    wrong_hashes: HashSet<String>,
    hashes: bool,
    fetch_delay: Option<Duration>,
    list_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Default for FakeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHub {
    /// Create an empty hub with its own cache directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary cache directory cannot be created.
    pub fn new() -> Self {
        Self {
            cache: TempDir::new().expect("create fake hub cache"),
            repos: HashMap::new(),
            listing_error: None,
            failing_fetches: HashSet::new(),
            wrong_hashes: HashSet::new(),
            hashes: false,
            fetch_delay: None,
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Add a file to a repository. Listing order follows insertion order.
    #[must_use]
    pub fn with_file(
        mut self,
        repo_id: impl Into<String>,
        filename: impl Into<String>,
        content: &[u8],
    ) -> Self {
        self.repos
            .entry(repo_id.into())
            .or_default()
            .push((filename.into(), content.to_vec()));
        self
    }

    /// Make every listing fail with `message`.
    #[must_use]
    pub fn failing_listing(mut self, message: impl Into<String>) -> Self {
        self.listing_error = Some(message.into());
        self
    }

    /// Make fetches of `filename` fail.
    #[must_use]
    pub fn failing_fetch(mut self, filename: impl Into<String>) -> Self {
        self.failing_fetches.insert(filename.into());
        self
    }

    /// Report the SHA-256 of each fetched file.
    #[must_use]
    pub const fn with_hashes(mut self) -> Self {
        self.hashes = true;
        self
    }

    /// Report a hash that does not match the content of `filename`.
    #[must_use]
    pub fn with_wrong_hash(mut self, filename: impl Into<String>) -> Self {
        self.wrong_hashes.insert(filename.into());
        self
    }

    /// Sleep this long inside every fetch.
    #[must_use]
    pub const fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Where a fetched file lives in the fake cache.
    pub fn cached_path(&self, repo_id: &str, filename: &str) -> PathBuf {
        self.cache
            .path()
            .join(repo_id.replace('/', "--"))
            .join(filename)
    }

    fn content(&self, repo_id: &str, filename: &str) -> Option<&[u8]> {
        self.repos.get(repo_id).and_then(|files| {
            files
                .iter()
                .find(|(name, _)| name == filename)
                .map(|(_, content)| content.as_slice())
        })
    }

    fn materialize(&self, repo_id: &str, filename: &str) -> HubResult<FetchedFile> {
        if self.failing_fetches.contains(filename) {
            return Err(HubError::Request {
                message: format!("simulated failure fetching {filename}"),
            });
        }

        let content = self
            .content(repo_id, filename)
            .ok_or_else(|| HubError::NotFound {
                what: format!("{repo_id}/{filename}"),
            })?;

        let path = self.cached_path(repo_id, filename);
        if !path.exists() {
            let write = |path: &PathBuf| -> std::io::Result<()> {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, content)
            };
            write(&path).map_err(|e| HubError::Cache {
                message: e.to_string(),
            })?;
        }

        let mut fetched = FetchedFile::new(path);
        if self.hashes {
            let digest = if self.wrong_hashes.contains(filename) {
                "0".repeat(64)
            } else {
                format!("{:x}", Sha256::digest(content))
            };
            fetched = fetched.with_sha256(digest);
        }
        Ok(fetched)
    }
}

#[async_trait]
impl HubClientPort for FakeHub {
    async fn list_repo_files(&self, repo_id: &str) -> HubResult<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.listing_error {
            return Err(HubError::Request {
                message: message.clone(),
            });
        }

        self.repos
            .get(repo_id)
            .map(|files| files.iter().map(|(name, _)| name.clone()).collect())
            .ok_or_else(|| HubError::NotFound {
                what: repo_id.to_string(),
            })
    }

    async fn fetch_file(&self, repo_id: &str, filename: &str) -> HubResult<FetchedFile> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        let result = self.materialize(repo_id, filename);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
