//! Release configuration loaded from `release.toml`.
//!
//! Every field is optional; missing fields fall back to the slangd defaults.
//!
//! ```toml
//! binary = "slangd"
//! package = "./cmd/slangd"
//! release_dir = "./ci/release"
//! os = ["darwin", "linux", "windows"]
//! arch = ["386", "amd64"]
//! checksums = false
//!
//! [toolchain]
//! program = "go"
//!
//! [signing]
//! program = "osslsigncode"
//! certificate = "./ci/b6k_csc.p12"
//! ```

use crate::error::{CliError, ReleaseError, Result};
use crate::release::settings::{
    Arch, DEFAULT_ARCH, DEFAULT_BINARY_NAME, DEFAULT_OS, DEFAULT_PACKAGE, DEFAULT_RELEASE_DIR, Os,
    SigningSettings, ToolchainSettings,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "release.toml";

/// Parsed release configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Executable name prefix.
    pub binary: String,

    /// Package path handed to the toolchain.
    pub package: String,

    /// Release directory, relative to the project root.
    pub release_dir: PathBuf,

    /// Operating systems of the matrix.
    pub os: Vec<Os>,

    /// Architectures of the matrix.
    pub arch: Vec<Arch>,

    /// Write SHA256SUMS next to the archives.
    pub checksums: bool,

    /// Toolchain invocation.
    pub toolchain: ToolchainSettings,

    /// Windows code signing.
    pub signing: SigningSettings,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY_NAME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            release_dir: PathBuf::from(DEFAULT_RELEASE_DIR),
            os: DEFAULT_OS.to_vec(),
            arch: DEFAULT_ARCH.to_vec(),
            checksums: false,
            toolchain: ToolchainSettings::default(),
            signing: SigningSettings::default(),
        }
    }
}

/// Parses a release config file.
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReleaseError::Cli(CliError::ExecutionFailed {
            command: "read_release_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let config: ReleaseConfig = toml::from_str(&contents).map_err(|source| ReleaseError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    if config.binary.trim().is_empty() {
        return Err(ReleaseError::Cli(CliError::InvalidArguments {
            reason: format!("'binary' must not be empty in {}", path.display()),
        }));
    }

    Ok(config)
}

/// Finds and loads the config for a run.
///
/// An explicit path must exist; relative paths resolve against `root`. Without
/// one, `release.toml` in `root` is used when present, otherwise the built-in
/// defaults.
pub fn discover_config(root: &Path, explicit: Option<&Path>) -> Result<ReleaseConfig> {
    if let Some(path) = explicit {
        let path = root.join(path);
        log::info!("Using release config {}", path.display());
        return load_config(&path);
    }

    let candidate = root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        log::info!("Found release config {}", candidate.display());
        load_config(&candidate)
    } else {
        log::debug!(
            "No {} in {} - using defaults",
            DEFAULT_CONFIG_FILE,
            root.display()
        );
        Ok(ReleaseConfig::default())
    }
}
