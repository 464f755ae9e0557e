//! Policy-aware file writes and directory creation.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Result type for core filesystem operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("filesystem operation failed on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// How to handle a write target that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Error with [`Error::AlreadyExists`] if the target exists.
    Fail,
    /// Leave an existing target untouched and report it was skipped.
    Skip,
    /// Always write.
    Overwrite,
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// Create a directory and all of its parents. A no-op if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Write `content` to `path` according to `policy`.
///
/// Parent directories are created as needed. The write is atomic with
/// respect to partial content: bytes go to a temp file in the target's
/// parent directory, which is then renamed over the target. A crash
/// mid-write never leaves a truncated target behind.
pub fn write_file(path: &Path, content: &str, policy: OverwritePolicy) -> Result<WriteResult> {
    if path.exists() {
        match policy {
            OverwritePolicy::Fail => {
                return Err(Error::AlreadyExists {
                    path: path.to_path_buf(),
                });
            }
            OverwritePolicy::Skip => return Ok(WriteResult::Skipped),
            OverwritePolicy::Overwrite => {}
        }
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    ensure_dir(parent)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::io(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    Ok(WriteResult::Written)
}
