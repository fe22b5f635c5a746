//! `HuggingFace` Hub client implementing `HubClientPort`.
//!
//! The `hf-hub` sync API is used; each call runs on tokio's blocking pool so
//! concurrent downloads do not stall the runtime.

use async_trait::async_trait;
use ggpull_core::{FetchedFile, HubClientPort, HubError, HubResult};
use hf_hub::api::sync::{Api, ApiBuilder, ApiRepo};
use hf_hub::{Repo, RepoType};

use crate::cache::content_sha256;
use crate::config::HfClientConfig;
use crate::error::{map_api_error, map_join_error};

/// Client for the `HuggingFace` Hub backed by the `hf-hub` crate.
pub struct HfHubClient {
    api: Api,
    revision: String,
}

impl HfHubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &HfClientConfig) -> HubResult<Self> {
        let mut builder = ApiBuilder::new().with_progress(false);

        if let Some(token) = &config.token {
            builder = builder.with_token(Some(token.clone()));
        }
        if let Some(cache_dir) = &config.cache_dir {
            builder = builder.with_cache_dir(cache_dir.clone());
        }

        let api = builder.build().map_err(|e| HubError::Configuration {
            message: format!("Failed to create HF API client: {e}"),
        })?;

        Ok(Self {
            api,
            revision: config.revision.clone(),
        })
    }

    fn repo(&self, repo_id: &str) -> ApiRepo {
        self.api.repo(Repo::with_revision(
            repo_id.to_string(),
            RepoType::Model,
            self.revision.clone(),
        ))
    }
}

#[async_trait]
impl HubClientPort for HfHubClient {
    async fn list_repo_files(&self, repo_id: &str) -> HubResult<Vec<String>> {
        tracing::debug!(repo_id, revision = %self.revision, "Listing repository files");
        let repo = self.repo(repo_id);

        let info = tokio::task::spawn_blocking(move || repo.info())
            .await
            .map_err(|e| map_join_error(&e))?
            .map_err(|e| map_api_error(e, repo_id))?;

        tracing::debug!(repo_id, sha = %info.sha, files = info.siblings.len(), "Repository listed");
        Ok(info.siblings.into_iter().map(|s| s.rfilename).collect())
    }

    async fn fetch_file(&self, repo_id: &str, filename: &str) -> HubResult<FetchedFile> {
        tracing::debug!(repo_id, filename, "Fetching file into hub cache");
        let repo = self.repo(repo_id);
        let name = filename.to_string();

        let cache_path = tokio::task::spawn_blocking(move || repo.get(&name))
            .await
            .map_err(|e| map_join_error(&e))?
            .map_err(|e| map_api_error(e, &format!("{repo_id}/{filename}")))?;

        let fetched = FetchedFile::new(cache_path);
        Ok(match content_sha256(&fetched.cache_path) {
            Some(sha) => fetched.with_sha256(sha),
            None => fetched,
        })
    }
}
