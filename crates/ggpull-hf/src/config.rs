//! Public configuration for the `HuggingFace` client.

use std::path::PathBuf;

/// Revision used when none is configured.
pub const DEFAULT_REVISION: &str = "main";

/// Configuration for the `HuggingFace` client.
///
/// # Example
///
/// ```
/// use ggpull_hf::HfClientConfig;
///
/// let config = HfClientConfig::new()
///     .with_cache_dir("./cache_folder")
///     .with_token("hf_xxx");
/// ```
#[derive(Debug, Clone)]
pub struct HfClientConfig {
    /// Local cache directory; `None` uses the hub client's default location.
    pub(crate) cache_dir: Option<PathBuf>,
    /// Optional authentication token for private or gated models
    pub(crate) token: Option<String>,
    /// Git revision to list and download from
    pub(crate) revision: String,
}

impl Default for HfClientConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            token: None,
            revision: DEFAULT_REVISION.to_string(),
        }
    }
}

impl HfClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set an authentication token for accessing private models.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional authentication token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the git revision (branch, tag or commit SHA).
    ///
    /// Defaults to `main`.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }
}
