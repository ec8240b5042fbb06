//! Builder for constructing Settings.

use super::{
    DEFAULT_ARCH, DEFAULT_OS, Settings, SigningPassword, SigningSettings, Target,
    ToolchainSettings, VersionContext, matrix,
};
use crate::{bail, release::error::ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Default executable name prefix.
pub const DEFAULT_BINARY_NAME: &str = "slangd";

/// Default package handed to the toolchain.
pub const DEFAULT_PACKAGE: &str = "./cmd/slangd";

/// Default release directory, relative to the project root.
pub const DEFAULT_RELEASE_DIR: &str = "./ci/release";

/// Builder for constructing [`Settings`].
///
/// Unset fields fall back to the slangd defaults: binary `slangd`, package
/// `./cmd/slangd`, release directory `./ci/release` and the
/// {darwin, linux, windows} × {386, amd64} matrix.
///
/// # Examples
///
/// ```no_run
/// use slangd_release::release::{SettingsBuilder, SigningPassword, VersionContext};
///
/// # fn example() -> slangd_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root("/src/slang")
///     .release_dir("dist")
///     .version(VersionContext::new("v1.2.3", 1_700_000_000))
///     .signing_password(Some(SigningPassword::new("secret")))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    binary_name: Option<String>,
    package: Option<String>,
    root: Option<PathBuf>,
    release_dir: Option<PathBuf>,
    matrix: Option<Vec<Target>>,
    toolchain: ToolchainSettings,
    signing: SigningSettings,
    version: Option<VersionContext>,
    keep_going: bool,
    checksums: bool,
    manifest_path: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the executable name prefix.
    ///
    /// Default: "slangd"
    pub fn binary_name(mut self, name: impl Into<String>) -> Self {
        self.binary_name = Some(name.into());
        self
    }

    /// Sets the package path passed to the toolchain.
    ///
    /// Default: "./cmd/slangd"
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Sets the project root.
    ///
    /// Default: current directory
    pub fn root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the release directory. Relative paths resolve against the root.
    ///
    /// Default: "./ci/release"
    pub fn release_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.release_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the matrix entries explicitly.
    ///
    /// Default: {darwin, linux, windows} × {386, amd64}
    pub fn matrix(mut self, targets: Vec<Target>) -> Self {
        self.matrix = Some(targets);
        self
    }

    /// Sets toolchain settings.
    pub fn toolchain(mut self, toolchain: ToolchainSettings) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Sets signing settings, keeping any password already supplied.
    pub fn signing(mut self, signing: SigningSettings) -> Self {
        let password = self.signing.password.take();
        self.signing = signing;
        if self.signing.password.is_none() {
            self.signing.password = password;
        }
        self
    }

    /// Sets the signing password. `None` disables signing.
    pub fn signing_password(mut self, password: Option<SigningPassword>) -> Self {
        self.signing.password = password;
        self
    }

    /// Sets the version context.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn version(mut self, version: VersionContext) -> Self {
        self.version = Some(version);
        self
    }

    /// Continue after failed entries instead of stopping.
    ///
    /// Default: false
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Write SHA256SUMS into the release directory.
    ///
    /// Default: false
    pub fn checksums(mut self, checksums: bool) -> Self {
        self.checksums = checksums;
        self
    }

    /// Write a JSON manifest to this path. Relative paths resolve against the root.
    ///
    /// Default: None
    pub fn manifest_path(mut self, path: Option<PathBuf>) -> Self {
        self.manifest_path = path;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the version is missing, empty or contains whitespace
    /// - the matrix is empty
    /// - the root cannot be made absolute
    pub fn build(self) -> crate::release::Result<Settings> {
        use crate::release::error::Context;

        let version = self.version.context("version is required")?;
        if version.version().is_empty() {
            bail!("version must not be empty");
        }
        if version.version().chars().any(char::is_whitespace) {
            bail!("version '{}' must not contain whitespace", version.version());
        }
        if version.version().contains(['/', '\\']) {
            bail!("version '{}' must not contain path separators", version.version());
        }

        let matrix = self
            .matrix
            .unwrap_or_else(|| matrix(&DEFAULT_OS, &DEFAULT_ARCH));
        if matrix.is_empty() {
            bail!("release matrix is empty");
        }

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = root
            .absolutize()
            .fs_context("resolving project root", &root)?
            .into_owned();

        let release_dir = root.join(
            self.release_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASE_DIR)),
        );
        let release_dir = release_dir
            .absolutize()
            .fs_context("resolving release directory", &release_dir)?
            .into_owned();

        let manifest_path = self.manifest_path.map(|p| root.join(p));

        Ok(Settings::new(
            self.binary_name
                .unwrap_or_else(|| DEFAULT_BINARY_NAME.to_string()),
            self.package.unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
            root,
            release_dir,
            matrix,
            self.toolchain,
            self.signing,
            version,
            self.keep_going,
            self.checksums,
            manifest_path,
        ))
    }
}
