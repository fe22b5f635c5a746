//! Content hash lookup in the hub cache.
//!
//! The hub cache stores each file once under `blobs/<etag>` and points a
//! per-revision snapshot entry at it. For LFS files (all GGUF weights) the
//! etag is the SHA-256 of the content, so the blob name doubles as the
//! expected hash.

use std::path::Path;

const SHA256_HEX_LEN: usize = 64;

/// Expected SHA-256 for a cached file, if its blob name is one.
///
/// Returns `None` for non-LFS files (40-char git SHA-1 etags) and for caches
/// that copy instead of linking.
pub(crate) fn content_sha256(cache_path: &Path) -> Option<String> {
    let blob = std::fs::canonicalize(cache_path).ok()?;
    let name = blob.file_name()?.to_str()?;
    is_sha256_hex(name).then(|| name.to_string())
}

fn is_sha256_hex(s: &str) -> bool {
    s.len() == SHA256_HEX_LEN
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
