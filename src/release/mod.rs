//! Release pipeline for slangd.
//!
//! Turns a version string (and an optional signing password) into one archive
//! per (OS, architecture) matrix entry:
//!
//! ```text
//! ci/release/
//! ├── slangd-v1_2_3-darwin-386.tar.gz
//! ├── slangd-v1_2_3-darwin-amd64.tar.gz
//! ├── slangd-v1_2_3-linux-386.tar.gz
//! ├── slangd-v1_2_3-linux-amd64.tar.gz
//! ├── slangd-v1_2_3-windows-386.zip
//! └── slangd-v1_2_3-windows-amd64.zip
//! ```

pub mod artifact;
pub mod builder;
pub mod descriptor;
pub mod error;
pub mod settings;
pub mod utils;

pub use artifact::{ReleaseReport, ReleasedArtifact};
pub use builder::{ReleaseBuilder, Step, TargetFailure};
pub use descriptor::{ArchiveFormat, BuildDescriptor};
pub use error::{Error, Result};
pub use settings::{
    Arch, Os, Settings, SettingsBuilder, SigningPassword, SigningSettings, Target,
    ToolchainSettings, VersionContext,
};
