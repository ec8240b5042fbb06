//! File system utilities for release runs.
//!
//! Idempotent create/remove helpers with path context on every error.

use crate::release::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all directories of the given path. Succeeds if it already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes a file, ignoring a missing one.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Returns the size of a file in bytes.
pub async fn file_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?;
    Ok(metadata.len())
}
