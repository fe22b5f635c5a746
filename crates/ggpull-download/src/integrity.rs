//! SHA-256 verification of cached files.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use ggpull_core::{DownloadError, DownloadResult};
use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the lowercase hex SHA-256 of a file. Blocking.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Check that `path` hashes to `expected`. Blocking.
pub(crate) fn verify_sha256(path: &Path, expected: &str) -> DownloadResult<()> {
    let actual = sha256_file(path)?;
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(DownloadError::integrity_failed(expected, actual))
    }
}
