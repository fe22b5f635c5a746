//! Main CLI parser and top-level argument handling.
//!
//! Global options apply to both download flows. Every option can also be set
//! through the environment (or a `.env` file loaded before parsing).

use std::path::PathBuf;

use clap::Parser;
use ggpull_download::TransferMode;
use ggpull_hf::DEFAULT_REVISION;

use crate::commands::Commands;

/// Default location of the download log.
pub const DEFAULT_LOG_FILE: &str = "/app/logs/download_models.log";

/// Default hub cache directory.
pub const DEFAULT_CACHE_DIR: &str = "./cache_folder";

/// Download GGUF model files from the Hugging Face Hub.
#[derive(Debug, Parser)]
#[command(name = "ggpull")]
#[command(about = "Download GGUF model files from the Hugging Face Hub")]
#[command(version)]
pub struct Cli {
    /// Append-only download log
    #[arg(long, env = "LOG_FILE", default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,

    /// Hub cache directory
    #[arg(long, env = "GGPULL_CACHE_DIR", default_value = DEFAULT_CACHE_DIR, global = true)]
    pub cache_dir: PathBuf,

    /// Hugging Face token for private or gated repositories
    #[arg(long, env = "HF_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Repository revision (branch, tag or commit) to list and download from
    #[arg(long, env = "HF_REVISION", default_value = DEFAULT_REVISION, global = true)]
    pub revision: String,

    /// Copy files out of the hub cache, or move them
    #[arg(long, env = "GGPULL_TRANSFER", default_value_t = TransferMode::Copy, global = true)]
    pub transfer: TransferMode,

    /// Check each file's SHA-256 against the hub's content hash
    #[arg(long, env = "GGPULL_VERIFY", global = true)]
    pub verify: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
