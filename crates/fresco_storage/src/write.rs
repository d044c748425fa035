//! Image persistence helpers.

use fresco_error::{StorageError, StorageErrorKind, StorageResult};
use std::path::{Path, PathBuf};

/// Write rendered image bytes to the given path.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// cannot be written.
#[tracing::instrument(skip(path, bytes), fields(path = %path.display(), size = bytes.len()))]
pub async fn write_image(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    tokio::fs::write(path, bytes).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    tracing::debug!(path = %path.display(), size = bytes.len(), "Wrote image file");
    Ok(())
}

/// Verify that every source image exists and can be opened.
///
/// Each file is opened and the handle dropped immediately, so the check
/// holds no resources on any exit path. Used before issuing an edit request
/// to avoid wasting a network call on an unreadable source.
///
/// # Errors
///
/// Returns `NotFound` for a missing path, `FileRead` for one that exists but
/// cannot be opened.
#[tracing::instrument(skip(paths), fields(count = paths.len()))]
pub async fn ensure_readable(paths: &[PathBuf]) -> StorageResult<()> {
    for path in paths {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;
        drop(file);
    }
    Ok(())
}
