//! Download lists for the `manifest` flow.

use std::path::Path;

use ggpull_core::ModelDescriptor;

use crate::commands::{DEFAULT_MODEL_DIR, DEFAULT_REPO_ID};
use crate::error::CliError;

/// Built-in list: both shards of Llama 3.3 70B Instruct Q8_0.
pub fn default_manifest() -> Vec<ModelDescriptor> {
    [
        "Llama-3.3-70B-Instruct-Q8_0-00001-of-00002.gguf",
        "Llama-3.3-70B-Instruct-Q8_0-00002-of-00002.gguf",
    ]
    .into_iter()
    .map(|filename| ModelDescriptor::new(DEFAULT_REPO_ID, filename, DEFAULT_MODEL_DIR))
    .collect()
}

/// Read a JSON array of descriptors.
pub fn load_manifest(path: &Path) -> Result<Vec<ModelDescriptor>, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Failed to read manifest {}: {e}", path.display())))?;
    parse_manifest(&content)
        .map_err(|e| CliError::Config(format!("Invalid manifest {}: {e}", path.display())))
}

fn parse_manifest(content: &str) -> Result<Vec<ModelDescriptor>, String> {
    let descriptors: Vec<ModelDescriptor> =
        serde_json::from_str(content).map_err(|e| e.to_string())?;

    if let Some(bad) = descriptors
        .iter()
        .find(|d| d.repo_id.trim().is_empty() || d.filename.trim().is_empty())
    {
        return Err(format!("entry {bad:?} has an empty repo_id or filename"));
    }
    Ok(descriptors)
}
