//! Subcommands: the two download flows.

use std::path::PathBuf;

use clap::Subcommand;
use ggpull_download::DEFAULT_MAX_CONCURRENT;

/// Default repository for `fetch`.
pub const DEFAULT_REPO_ID: &str = "lmstudio-community/Llama-3.3-70B-Instruct-GGUF";

/// Default quantization tag for `fetch`.
pub const DEFAULT_QUANTIZATION: &str = "Q8_0";

/// Default target directory for `fetch`.
pub const DEFAULT_MODEL_DIR: &str = "/app/models";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List a repository and download every GGUF file for one quantization, concurrently
    Fetch {
        /// Hugging Face repository (e.g., "lmstudio-community/Llama-3.3-70B-Instruct-GGUF")
        #[arg(long, env = "MODEL_REPO_ID", default_value = DEFAULT_REPO_ID)]
        repo: String,
        /// Quantization tag to match in filenames (e.g., "Q8_0", "Q4_K_M")
        #[arg(short, long, env = "QUANTIZATION", default_value = DEFAULT_QUANTIZATION)]
        quantization: String,
        /// Directory the files are saved to
        #[arg(long, env = "MODEL_DIR", default_value = DEFAULT_MODEL_DIR)]
        model_dir: PathBuf,
        /// Maximum files downloaded at once
        #[arg(long, env = "GGPULL_MAX_CONCURRENT", default_value_t = DEFAULT_MAX_CONCURRENT)]
        max_concurrent: usize,
        /// Print the matching files without downloading anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Download a fixed list of files, one after another
    Manifest {
        /// JSON array of {"repo_id", "filename", "target_folder"} objects.
        /// Uses the built-in list when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_fetch_args() {
        let cli = Cli::parse_from([
            "ggpull",
            "fetch",
            "--repo",
            "org/model-GGUF",
            "-q",
            "Q4_K_M",
            "--model-dir",
            "/tmp/models",
            "--max-concurrent",
            "2",
            "--dry-run",
        ]);

        match cli.command {
            Some(Commands::Fetch {
                repo,
                quantization,
                model_dir,
                max_concurrent,
                dry_run,
            }) => {
                assert_eq!(repo, "org/model-GGUF");
                assert_eq!(quantization, "Q4_K_M");
                assert_eq!(model_dir, PathBuf::from("/tmp/models"));
                assert_eq!(max_concurrent, 2);
                assert!(dry_run);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_manifest_file_is_optional() {
        let cli = Cli::parse_from(["ggpull", "manifest"]);
        assert!(matches!(cli.command, Some(Commands::Manifest { file: None })));

        let cli = Cli::parse_from(["ggpull", "manifest", "--file", "models.json"]);
        match cli.command {
            Some(Commands::Manifest { file }) => {
                assert_eq!(file, Some(PathBuf::from("models.json")));
            }
            other => panic!("Expected Manifest, got {other:?}"),
        }
    }
}
