//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together:
//! - Log directory and append-only log sink (via ggpull-core)
//! - Hub client (via ggpull-hf)
//! - Downloader (via ggpull-download)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ggpull_core::{FileLogSink, HubClientPort, LogSink, ensure_directory};
use ggpull_download::{DownloadOptions, Downloader};
use ggpull_hf::{HfClientConfig, HfHubClient};

use crate::commands::Commands;
use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Append-only download log.
    pub log_file: PathBuf,
    /// Hub cache directory.
    pub cache_dir: PathBuf,
    /// Hub token for private repositories.
    pub token: Option<String>,
    /// Repository revision to list and download from.
    pub revision: String,
    /// Options shared by every download in the run.
    pub options: DownloadOptions,
}

impl CliConfig {
    /// Collect the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut options = DownloadOptions::new()
            .with_transfer(cli.transfer)
            .with_verify(cli.verify);
        if let Some(Commands::Fetch { max_concurrent, .. }) = &cli.command {
            options = options.with_max_concurrent(*max_concurrent);
        }

        Self {
            log_file: cli.log_file.clone(),
            cache_dir: cli.cache_dir.clone(),
            token: cli.token.clone(),
            revision: cli.revision.clone(),
            options,
        }
    }
}

/// Fully composed context for command handlers.
pub struct CliContext {
    downloader: Downloader,
}

impl CliContext {
    /// Compose a context from already-built collaborators.
    pub fn new(
        hub: Arc<dyn HubClientPort>,
        log: Arc<dyn LogSink>,
        options: DownloadOptions,
    ) -> Self {
        Self {
            downloader: Downloader::new(hub, log, options),
        }
    }

    pub const fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    pub fn hub(&self) -> &dyn HubClientPort {
        self.downloader.hub().as_ref()
    }

    pub fn log_sink(&self) -> &dyn LogSink {
        self.downloader.log_sink().as_ref()
    }

    /// Append a line to the download log.
    pub fn log(&self, message: &str) {
        self.log_sink().log(message);
    }
}

/// Bootstrap the CLI application.
///
/// 1. Ensure the log directory exists and open the log file for appending
/// 2. Ensure the hub cache directory exists and build the hub client
/// 3. Assemble the downloader
///
/// Any failure here is fatal for the run.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    if let Some(log_dir) = config
        .log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        ensure_directory(log_dir).map_err(CliError::from)?;
    }
    let log: Arc<dyn LogSink> =
        Arc::new(FileLogSink::open(&config.log_file).map_err(CliError::from)?);

    ensure_directory(&config.cache_dir).map_err(CliError::from)?;
    let hub_config = HfClientConfig::new()
        .with_cache_dir(&config.cache_dir)
        .with_optional_token(config.token)
        .with_revision(config.revision.as_str());
    let hub: Arc<dyn HubClientPort> =
        Arc::new(HfHubClient::new(&hub_config).map_err(CliError::from)?);

    tracing::debug!(
        log_file = %config.log_file.display(),
        cache_dir = %config.cache_dir.display(),
        revision = %config.revision,
        transfer = %config.options.transfer,
        verify = config.options.verify,
        max_concurrent = config.options.max_concurrent,
        "Bootstrapped CLI context"
    );

    Ok(CliContext::new(hub, log, config.options))
}
