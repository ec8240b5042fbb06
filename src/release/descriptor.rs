//! Per-target file naming.

use super::settings::{Target, VersionContext};
use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Archive container used for a target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    /// `.zip`, used for Windows
    Zip,
    /// `.tar.gz`, used everywhere else
    #[serde(rename = "tar.gz")]
    TarGz,
}

impl ArchiveFormat {
    /// Picks the archive format for a target.
    pub fn for_target(target: &Target) -> Self {
        if target.os.is_windows() {
            Self::Zip
        } else {
            Self::TarGz
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Zip => ".zip",
            Self::TarGz => ".tar.gz",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension()[1..])
    }
}

/// File names derived for one matrix entry.
///
/// For `slangd`, version `v1.2.3` and `windows-386`:
///
/// | item           | name                                   |
/// |----------------|----------------------------------------|
/// | stem           | `slangd-v1_2_3-windows-386`            |
/// | binary         | `slangd-v1_2_3-windows-386.exe`        |
/// | signed binary  | `signed_slangd-v1_2_3-windows-386.exe` |
/// | archive        | `slangd-v1_2_3-windows-386.zip`        |
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildDescriptor {
    target: Target,
    binary_file: String,
    archive_file: String,
    format: ArchiveFormat,
}

impl BuildDescriptor {
    /// Derives the names for `target`.
    pub fn new(binary_name: &str, version: &VersionContext, target: Target) -> Self {
        let stem = format!(
            "{}-{}-{}-{}",
            binary_name,
            version.file_version(),
            target.os,
            target.arch
        );
        let binary_file = if target.os.is_windows() {
            format!("{stem}.exe")
        } else {
            stem.clone()
        };
        let format = ArchiveFormat::for_target(&target);
        let archive_file = format!("{stem}{}", format.extension());

        Self {
            target,
            binary_file,
            archive_file,
            format,
        }
    }

    /// The matrix entry.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Executable file name, `.exe`-suffixed on Windows.
    pub fn binary_file(&self) -> &str {
        &self.binary_file
    }

    /// Archive file name.
    pub fn archive_file(&self) -> &str {
        &self.archive_file
    }

    /// Archive container.
    pub fn format(&self) -> ArchiveFormat {
        self.format
    }

    /// Path of the compiled binary inside `release_dir`.
    pub fn binary_path(&self, release_dir: &Path) -> PathBuf {
        release_dir.join(&self.binary_file)
    }

    /// Path the signing tool writes to inside `release_dir`.
    pub fn signed_binary_path(&self, release_dir: &Path) -> PathBuf {
        release_dir.join(format!("signed_{}", self.binary_file))
    }

    /// Path of the final archive inside `release_dir`.
    pub fn archive_path(&self, release_dir: &Path) -> PathBuf {
        release_dir.join(&self.archive_file)
    }

    /// Path the archive is written to before being renamed into place.
    pub fn partial_archive_path(&self, release_dir: &Path) -> PathBuf {
        release_dir.join(format!("{}.partial", self.archive_file))
    }
}
