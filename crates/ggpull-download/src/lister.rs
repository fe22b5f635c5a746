//! Repository listing and quantization filtering.

use ggpull_core::{HubClientPort, LogSink};

/// File extension of model weight files.
pub const GGUF_EXTENSION: &str = ".gguf";

/// Keep only GGUF files whose path contains the quantization tag.
///
/// Matching is a case-sensitive substring test on the full repository path,
/// so `Q8_0` matches both `model-Q8_0.gguf` and `Q8_0/model-00001-of-00002.gguf`.
/// Hub order is preserved.
pub fn filter_quantized_files<I, S>(files: I, quantization: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    files
        .into_iter()
        .map(Into::into)
        .filter(|file| file.contains(quantization) && file.ends_with(GGUF_EXTENSION))
        .collect()
}

/// List a repository and return the files matching `quantization`.
///
/// A listing failure is logged and yields an empty list; callers treat empty
/// as "nothing to do".
pub async fn fetch_model_files(
    hub: &dyn HubClientPort,
    log: &dyn LogSink,
    repo_id: &str,
    quantization: &str,
) -> Vec<String> {
    log.log(&format!("Fetching file list from repository: {repo_id}"));

    match hub.list_repo_files(repo_id).await {
        Ok(files) => {
            let quantized = filter_quantized_files(files, quantization);
            log.log(&format!(
                "Found {} files for quantization level {quantization}.",
                quantized.len()
            ));
            quantized
        }
        Err(e) => {
            log.log(&format!("Failed to fetch files from repository: {e}"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHub;
    use ggpull_core::MemoryLogSink;

    #[test]
    fn test_filter_example_listing() {
        let files = ["A-Q8_0-001.gguf", "A-Q4_0-001.gguf", "readme.md"];
        assert_eq!(filter_quantized_files(files, "Q8_0"), vec!["A-Q8_0-001.gguf"]);
    }

    #[test]
    fn test_filter_requires_both_tag_and_extension() {
        let files = [
            "Llama-Q8_0-00002-of-00002.gguf",
            "Llama-Q8_0.md",
            "Llama-Q4_K_M.gguf",
            "Q8_0/Llama-00001-of-00002.gguf",
            "notes.txt",
            "Llama-Q8_0-00001-of-00002.gguf",
        ];

        assert_eq!(
            filter_quantized_files(files, "Q8_0"),
            vec![
                "Llama-Q8_0-00002-of-00002.gguf",
                "Q8_0/Llama-00001-of-00002.gguf",
                "Llama-Q8_0-00001-of-00002.gguf",
            ]
        );
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let files = ["model-q8_0.gguf", "model-Q8_0.GGUF"];
        assert!(filter_quantized_files(files, "Q8_0").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_model_files_logs_count() {
        let hub = FakeHub::new()
            .with_file("org/model-GGUF", "model-Q8_0.gguf", b"q8")
            .with_file("org/model-GGUF", "model-Q4_K_M.gguf", b"q4")
            .with_file("org/model-GGUF", "README.md", b"readme");
        let log = MemoryLogSink::new();

        let files = fetch_model_files(&hub, &log, "org/model-GGUF", "Q8_0").await;

        assert_eq!(files, vec!["model-Q8_0.gguf"]);
        assert_eq!(
            log.lines(),
            vec![
                "Fetching file list from repository: org/model-GGUF".to_string(),
                "Found 1 files for quantization level Q8_0.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_listing_failure_yields_empty() {
        let hub = FakeHub::new().failing_listing("repository unreachable");
        let log = MemoryLogSink::new();

        let files = fetch_model_files(&hub, &log, "org/missing-GGUF", "Q8_0").await;

        assert!(files.is_empty());
        assert_eq!(hub.list_calls(), 1);
        assert_eq!(hub.fetch_calls(), 0);
        assert!(log.contains("Failed to fetch files from repository:"));
        assert!(log.contains("repository unreachable"));
    }
}
