//! End-to-end runs of both download flows against an in-memory hub.

use std::path::Path;
use std::sync::Arc;

use ggpull_cli::CliContext;
use ggpull_cli::handlers::{self, fetch::FetchArgs};
use ggpull_core::{LogSink, MemoryLogSink, ModelDescriptor};
use ggpull_download::testing::FakeHub;
use ggpull_download::{DownloadOptions, JobState};
use tempfile::tempdir;

const REPO: &str = "lmstudio-community/Llama-3.3-70B-Instruct-GGUF";

fn llama_hub() -> FakeHub {
    FakeHub::new()
        .with_file(REPO, "Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf", b"shard one")
        .with_file(REPO, "Llama-3.3-70B-Instruct-Q4_K_M.gguf", b"q4")
        .with_file(REPO, "Llama-3.3-70B-Instruct-Q8_0-00002-of-00002.gguf", b"shard two")
        .with_file(REPO, "README.md", b"readme")
}

fn context(hub: Arc<FakeHub>, log: Arc<MemoryLogSink>) -> CliContext {
    CliContext::new(hub, log, DownloadOptions::default())
}

fn fetch_args(model_dir: &Path) -> FetchArgs<'_> {
    FetchArgs {
        repo_id: REPO,
        quantization: "Q8_0",
        model_dir,
        dry_run: false,
    }
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn fetch_downloads_matching_files() {
    let root = tempdir().unwrap();
    let model_dir = root.path().join("models");
    let hub = Arc::new(llama_hub());
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(hub.clone(), log.clone());

    let summary = handlers::fetch::execute(&ctx, fetch_args(&model_dir))
        .await
        .unwrap();

    assert_eq!(summary.saved, 2);
    assert!(!summary.has_failures());
    assert_eq!(
        dir_entries(&model_dir),
        vec![
            "Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf",
            "Llama-3.3-70B-Instruct-Q8_0-00002-of-00002.gguf",
        ]
    );
    assert_eq!(
        std::fs::read(model_dir.join("Llama-3.3-70B-Instruct-Q8_0-00002-of-00002.gguf")).unwrap(),
        b"shard two"
    );

    let lines = log.lines();
    assert_eq!(lines.first().unwrap(), "Starting GGUF model download process...");
    assert_eq!(lines.last().unwrap(), "GGUF model download process completed.");
    assert!(log.contains("Found 2 files for quantization level Q8_0."));
    assert!(log.contains("Summary: 2 saved, 0 skipped, 0 failed."));
}

#[tokio::test]
async fn second_run_skips_everything() {
    let root = tempdir().unwrap();
    let model_dir = root.path().join("models");
    let hub = Arc::new(llama_hub());

    let first = context(hub.clone(), Arc::new(MemoryLogSink::new()));
    handlers::fetch::execute(&first, fetch_args(&model_dir))
        .await
        .unwrap();
    let after_first = dir_entries(&model_dir);
    let fetches_after_first = hub.fetch_calls();

    let log = Arc::new(MemoryLogSink::new());
    let second = context(hub.clone(), log.clone());
    let summary = handlers::fetch::execute(&second, fetch_args(&model_dir))
        .await
        .unwrap();

    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.saved, 0);
    assert_eq!(dir_entries(&model_dir), after_first);
    assert_eq!(hub.fetch_calls(), fetches_after_first);
    assert_eq!(
        log.lines()
            .iter()
            .filter(|l| l.starts_with("File already exists: "))
            .count(),
        2
    );
}

#[tokio::test]
async fn listing_failure_downloads_nothing() {
    let root = tempdir().unwrap();
    let model_dir = root.path().join("models");
    let hub = Arc::new(llama_hub().failing_listing("503 Service Unavailable"));
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(hub.clone(), log.clone());

    let summary = handlers::fetch::execute(&ctx, fetch_args(&model_dir))
        .await
        .unwrap();

    assert_eq!(summary.total(), 0);
    assert!(!summary.has_failures());
    assert_eq!(hub.fetch_calls(), 0);
    assert!(log.contains("Failed to fetch files from repository:"));
    assert!(log.contains("No files found for quantization level Q8_0."));
    assert!(model_dir.is_dir());
    assert!(dir_entries(&model_dir).is_empty());
}

#[tokio::test]
async fn dry_run_lists_without_downloading() {
    let root = tempdir().unwrap();
    let model_dir = root.path().join("models");
    let hub = Arc::new(llama_hub());
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(hub.clone(), log.clone());

    let mut args = fetch_args(&model_dir);
    args.dry_run = true;
    let summary = handlers::fetch::execute(&ctx, args).await.unwrap();

    assert_eq!(summary.total(), 0);
    assert_eq!(hub.fetch_calls(), 0);
    assert!(!model_dir.exists());
    assert_eq!(
        log.lines()
            .iter()
            .filter(|l| l.starts_with("Would download "))
            .count(),
        2
    );
}

#[tokio::test]
async fn failed_file_is_reported_in_summary() {
    let root = tempdir().unwrap();
    let model_dir = root.path().join("models");
    let hub = Arc::new(llama_hub().failing_fetch("Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf"));
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(hub, log.clone());

    let summary = handlers::fetch::execute(&ctx, fetch_args(&model_dir))
        .await
        .unwrap();

    assert!(summary.has_failures());
    assert_eq!(summary.saved, 1);
    assert_eq!(
        summary.failed_files,
        vec!["Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf".to_string()]
    );
    assert!(log.contains("Summary: 1 saved, 0 skipped, 1 failed."));
}

#[tokio::test]
async fn manifest_runs_in_list_order() {
    let root = tempdir().unwrap();
    let target = root.path().join("app").join("models");
    let hub = Arc::new(llama_hub());
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(hub.clone(), log.clone());

    let descriptors = vec![
        ModelDescriptor::new(REPO, "Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf", &target),
        ModelDescriptor::new(REPO, "Llama-3.3-70B-Instruct-Q8_0-00002-of-00002.gguf", &target),
    ];
    let summary = handlers::manifest::execute(&ctx, descriptors).await.unwrap();

    assert_eq!(summary.saved, 2);
    assert_eq!(hub.max_in_flight(), 1);
    assert_eq!(hub.list_calls(), 0);

    let lines = log.lines();
    assert_eq!(lines.first().unwrap(), "Download script started.");
    assert_eq!(lines.last().unwrap(), "Download script finished.");
    let starts: Vec<_> = lines
        .iter()
        .filter(|l| l.starts_with("Starting download for "))
        .collect();
    assert!(starts[0].ends_with("00001-of-00002.gguf"));
    assert!(starts[1].ends_with("00002-of-00002.gguf"));
}

#[tokio::test]
async fn manifest_rerun_is_idempotent() {
    let root = tempdir().unwrap();
    let target = root.path().join("models");
    let hub = Arc::new(llama_hub());
    let descriptors = vec![ModelDescriptor::new(
        REPO,
        "Llama-3.3-70B-Instruct-Q4_K_M.gguf",
        &target,
    )];

    let ctx = context(hub.clone(), Arc::new(MemoryLogSink::new()));
    handlers::manifest::execute(&ctx, descriptors.clone())
        .await
        .unwrap();

    let jobs = ctx
        .downloader()
        .download_sequential(descriptors)
        .await;
    assert!(jobs.iter().all(|j| j.state() == JobState::Skipped));
    assert_eq!(hub.fetch_calls(), 1);
}

#[test]
fn context_log_reaches_sink() {
    let log = Arc::new(MemoryLogSink::new());
    let ctx = context(Arc::new(FakeHub::new()), log.clone());
    ctx.log("hello");
    ctx.log_sink().log("world");
    assert_eq!(log.lines(), vec!["hello".to_string(), "world".to_string()]);
}
