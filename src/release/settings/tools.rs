//! Toolchain and code-signing configuration.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, path::PathBuf};

/// Compiler toolchain invocation settings.
///
/// # Configuration
///
/// ```toml
/// [toolchain]
/// program = "go"
/// version_symbol = "main.Version"
/// build_time_symbol = "main.BuildTime"
///
/// [toolchain.env]
/// CGO_ENABLED = "0"
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainSettings {
    /// Compiler program, looked up on PATH unless it is a path.
    ///
    /// Default: "go"
    pub program: String,

    /// Fully qualified symbol receiving the version string.
    ///
    /// Default: "main.Version"
    pub version_symbol: String,

    /// Fully qualified symbol receiving the build timestamp.
    ///
    /// Default: "main.BuildTime"
    pub build_time_symbol: String,

    /// Extra environment passed to every compiler invocation.
    ///
    /// `GOOS` and `GOARCH` are always set from the matrix entry and win over
    /// values given here.
    pub env: BTreeMap<String, String>,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            program: "go".into(),
            version_symbol: "main.Version".into(),
            build_time_symbol: "main.BuildTime".into(),
            env: BTreeMap::new(),
        }
    }
}

/// Authenticode signing settings for Windows binaries.
///
/// Signing only happens when a [`SigningPassword`] is present. The password is
/// never read from the config file.
///
/// # Configuration
///
/// ```toml
/// [signing]
/// program = "osslsigncode"
/// certificate = "./ci/b6k_csc.p12"
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SigningSettings {
    /// Signing program.
    ///
    /// Default: "osslsigncode"
    pub program: String,

    /// PKCS#12 bundle holding the certificate and private key.
    ///
    /// Relative paths resolve against the project root.
    ///
    /// Default: "./ci/b6k_csc.p12"
    pub certificate: PathBuf,

    /// Password unlocking the PKCS#12 bundle.
    #[serde(skip)]
    pub password: Option<SigningPassword>,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            program: "osslsigncode".into(),
            certificate: PathBuf::from("./ci/b6k_csc.p12"),
            password: None,
        }
    }
}

impl SigningSettings {
    /// Whether Windows binaries will be signed.
    pub fn enabled(&self) -> bool {
        self.password.is_some()
    }
}

/// Signing credential.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningPassword(String);

impl SigningPassword {
    /// Wraps a password.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// The raw password, for handing to the signing tool only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// manual impls so the password can't leak through logging or error output
impl fmt::Debug for SigningPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningPassword(<hidden>)")
    }
}

impl fmt::Display for SigningPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<hidden>")
    }
}
