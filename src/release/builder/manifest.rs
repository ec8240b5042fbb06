//! JSON release manifest.

use crate::release::{
    artifact::ReleaseReport,
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use std::path::Path;

/// Serializes `report` as pretty JSON to `path`, creating parent directories.
pub async fn write_manifest(path: &Path, report: &ReleaseReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing release manifest")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json)
        .await
        .fs_context("writing release manifest", path)?;

    log::info!("✓ Wrote manifest {}", path.display());
    Ok(())
}
