//! Results of a release run.

use super::{Target, descriptor::ArchiveFormat};
use serde::Serialize;
use std::path::PathBuf;

/// One finished release archive.
#[derive(Clone, Debug, Serialize)]
pub struct ReleasedArtifact {
    /// Matrix entry the archive was built for.
    pub target: Target,
    /// Archive file name, e.g. `slangd-v1_2_3-linux-amd64.tar.gz`.
    pub archive: String,
    /// Name of the binary inside the archive.
    pub binary: String,
    /// Absolute path of the archive.
    #[serde(skip)]
    pub path: PathBuf,
    /// Archive container.
    pub format: ArchiveFormat,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub sha256: String,
    /// Whether the binary went through the signing step.
    pub signed: bool,
}

/// Summary of a completed run.
#[derive(Clone, Debug, Serialize)]
pub struct ReleaseReport {
    /// Version string as supplied.
    pub version: String,
    /// Build time in seconds since the Unix epoch.
    pub build_time: i64,
    /// Build time as RFC 3339.
    pub build_time_rfc3339: Option<String>,
    /// Archives in build order.
    pub artifacts: Vec<ReleasedArtifact>,
}
