//! Artifact checksum calculation.
//!
//! This module provides SHA256 checksums for release archives and writes them
//! in the `sha256sum` format.

use crate::release::error::{ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Name of the checksum file written into the release directory.
pub const CHECKSUMS_FILE: &str = "SHA256SUMS";

/// Calculates the SHA256 checksum of a file.
///
/// Reads the file in 8KB chunks to handle large files efficiently.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the file cannot be read
pub async fn calculate_sha256(file_path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Writes `<hex>  <file name>` lines to [`CHECKSUMS_FILE`] in `release_dir`.
pub async fn write_checksums<'a, I>(release_dir: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let contents: String = entries
        .into_iter()
        .map(|(name, sha256)| format!("{sha256}  {name}\n"))
        .collect();

    let path = release_dir.join(CHECKSUMS_FILE);
    tokio::fs::write(&path, contents)
        .await
        .fs_context("writing checksums", &path)?;

    log::info!("✓ Wrote {}", path.display());
    Ok(())
}
