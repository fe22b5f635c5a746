//! Placing cached hub files into the target directory.
//!
//! Files are staged under a temporary name next to the target and renamed
//! into place, so an interrupted or failed transfer never leaves a partial
//! file at the target path.

use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::str::FromStr;

/// What happens to the hub cache entry when a file is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferMode {
    /// Copy the cached file; the cache stays populated.
    #[default]
    Copy,
    /// Move the cached blob, consuming the cache entry.
    Move,
}

impl TransferMode {
    /// Verb used in log lines ("Copying x to y").
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Copy => "Copying",
            Self::Move => "Moving",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("copy"),
            Self::Move => f.write_str("move"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "move" => Ok(Self::Move),
            other => Err(format!("invalid transfer mode '{other}' (expected 'copy' or 'move')")),
        }
    }
}

/// Transfer `source` (a hub cache path) to `target`. Blocking.
///
/// Fails with `AlreadyExists` if `target` exists; an existing file is never
/// overwritten.
pub fn transfer_file(source: &Path, target: &Path, mode: TransferMode) -> io::Result<()> {
    match mode {
        TransferMode::Copy => copy_into_place(source, target),
        TransferMode::Move => move_into_place(source, target),
    }
}

fn copy_into_place(source: &Path, target: &Path) -> io::Result<()> {
    let dir = target.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no parent directory", target.display()),
        )
    })?;

    let mut staged = tempfile::Builder::new()
        .prefix(".ggpull-")
        .suffix(".part")
        .tempfile_in(dir)?;

    let mut reader = File::open(source)?;
    io::copy(&mut reader, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    fs::set_permissions(staged.path(), reader.metadata()?.permissions())?;

    staged.persist_noclobber(target).map_err(|e| e.error)?;
    Ok(())
}

fn move_into_place(source: &Path, target: &Path) -> io::Result<()> {
    // Cache snapshot entries are links into the blob store; move the blob itself.
    let blob = fs::canonicalize(source)?;

    // Linking fails with AlreadyExists instead of replacing the target.
    match fs::hard_link(&blob, target) {
        Ok(()) => fs::remove_file(&blob)?,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Err(e),
        Err(e) => {
            tracing::debug!(
                from = %blob.display(),
                to = %target.display(),
                error = %e,
                "Hard link failed, falling back to copy and remove"
            );
            copy_into_place(&blob, target)?;
            fs::remove_file(&blob)?;
        }
    }

    if fs::symlink_metadata(source).is_ok_and(|m| m.file_type().is_symlink()) {
        if let Err(e) = fs::remove_file(source) {
            tracing::debug!(
                link = %source.display(),
                error = %e,
                "Failed to remove cache snapshot link"
            );
        }
    }

    Ok(())
}
