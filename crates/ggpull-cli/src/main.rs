//! CLI entry point - the composition root.
//!
//! Parses arguments, bootstraps the context and dispatches to a handler.
//! Setup errors and failed batches map to non-zero exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ggpull_cli::error::exit_code_for;
use ggpull_cli::handlers::{self, fetch::FetchArgs};
use ggpull_cli::manifest::{default_manifest, load_manifest};
use ggpull_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Read the manifest before touching the filesystem
    let descriptors = match command {
        Commands::Manifest { file: Some(path) } => Some(load_manifest(path)?),
        Commands::Manifest { file: None } => Some(default_manifest()),
        Commands::Fetch { .. } => None,
    };

    let ctx = bootstrap(CliConfig::from_cli(&cli))?;

    let summary = match command {
        Commands::Fetch {
            repo,
            quantization,
            model_dir,
            dry_run,
            ..
        } => {
            let args = FetchArgs {
                repo_id: repo,
                quantization,
                model_dir,
                dry_run: *dry_run,
            };
            handlers::fetch::execute(&ctx, args).await?
        }
        Commands::Manifest { .. } => {
            handlers::manifest::execute(&ctx, descriptors.unwrap_or_default()).await?
        }
    };

    if summary.has_failures() {
        return Err(CliError::DownloadsFailed {
            failed: summary.failed,
            total: summary.total(),
            files: summary.failed_files,
        }
        .into());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
