//! Core Settings struct and implementations.

use super::{SigningSettings, Target, ToolchainSettings, VersionContext};
use crate::release::descriptor::BuildDescriptor;
use std::path::{Path, PathBuf};

/// Main settings for a release run.
///
/// Central configuration for the [`ReleaseBuilder`](crate::release::ReleaseBuilder),
/// constructed via [`SettingsBuilder`](super::SettingsBuilder). All paths are
/// absolute once built.
///
/// # Examples
///
/// ```no_run
/// use slangd_release::release::{SettingsBuilder, VersionContext};
///
/// # fn example() -> slangd_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root(".")
///     .version(VersionContext::now("v1.2.3"))
///     .build()?;
/// assert_eq!(settings.matrix().len(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Executable name prefix, e.g. "slangd".
    binary_name: String,

    /// Package handed to the toolchain, e.g. "./cmd/slangd".
    package: String,

    /// Project root; working directory of every toolchain invocation.
    root: PathBuf,

    /// Directory receiving the archives.
    release_dir: PathBuf,

    /// Matrix entries, in build order.
    matrix: Vec<Target>,

    toolchain: ToolchainSettings,

    signing: SigningSettings,

    version: VersionContext,

    /// Continue with the next entry after a failure.
    keep_going: bool,

    /// Write SHA256SUMS next to the archives.
    checksums: bool,

    /// Where to write the JSON manifest, if requested.
    manifest_path: Option<PathBuf>,
}

impl Settings {
    /// Returns the executable name prefix.
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    /// Returns the package path passed to the toolchain.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the absolute release directory.
    pub fn release_dir(&self) -> &Path {
        &self.release_dir
    }

    /// Returns the matrix entries in build order.
    pub fn matrix(&self) -> &[Target] {
        &self.matrix
    }

    /// Returns the toolchain settings.
    pub fn toolchain(&self) -> &ToolchainSettings {
        &self.toolchain
    }

    /// Returns the signing settings.
    pub fn signing(&self) -> &SigningSettings {
        &self.signing
    }

    /// Returns the version context.
    pub fn version(&self) -> &VersionContext {
        &self.version
    }

    /// Whether a failed entry lets the remaining entries run.
    pub fn keep_going(&self) -> bool {
        self.keep_going
    }

    /// Whether to write a SHA256SUMS file.
    pub fn checksums(&self) -> bool {
        self.checksums
    }

    /// Returns the manifest output path, if any.
    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    /// Whether this target's binary goes through the signing step.
    pub fn should_sign(&self, target: &Target) -> bool {
        target.os.is_windows() && self.signing.enabled()
    }

    /// Whether any matrix entry will be signed.
    pub fn signs_anything(&self) -> bool {
        self.matrix.iter().any(|t| self.should_sign(t))
    }

    /// Absolute path of the signing certificate.
    pub fn certificate_path(&self) -> PathBuf {
        self.root.join(&self.signing.certificate)
    }

    /// Derives the file names for one matrix entry.
    pub fn descriptor(&self, target: Target) -> BuildDescriptor {
        BuildDescriptor::new(&self.binary_name, &self.version, target)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        binary_name: String,
        package: String,
        root: PathBuf,
        release_dir: PathBuf,
        matrix: Vec<Target>,
        toolchain: ToolchainSettings,
        signing: SigningSettings,
        version: VersionContext,
        keep_going: bool,
        checksums: bool,
        manifest_path: Option<PathBuf>,
    ) -> Self {
        Self {
            binary_name,
            package,
            root,
            release_dir,
            matrix,
            toolchain,
            signing,
            version,
            keep_going,
            checksums,
            manifest_path,
        }
    }
}
