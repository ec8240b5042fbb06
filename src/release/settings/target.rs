//! Operating system / architecture pairs of the release matrix.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Target operating system, spelled the way the Go toolchain expects in `GOOS`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    /// macOS
    Darwin,
    /// Linux
    Linux,
    /// Windows - binaries get an `.exe` suffix and are archived as zip
    Windows,
    /// FreeBSD
    Freebsd,
}

impl Os {
    /// `GOOS` value for this operating system.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Freebsd => "freebsd",
        }
    }

    /// Returns true for the Windows target.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            "freebsd" => Ok(Self::Freebsd),
            other => Err(format!(
                "unknown OS '{other}' (expected darwin, linux, windows or freebsd)"
            )),
        }
    }
}

/// Target CPU architecture, spelled the way the Go toolchain expects in `GOARCH`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub enum Arch {
    /// 32-bit x86
    #[serde(rename = "386")]
    X86,
    /// x86_64
    #[serde(rename = "amd64")]
    Amd64,
    /// AArch64
    #[serde(rename = "arm64")]
    Arm64,
    /// 32-bit ARM
    #[serde(rename = "arm")]
    Arm,
}

impl Arch {
    /// `GOARCH` value for this architecture.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86 => "386",
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Arm => "arm",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "386" => Ok(Self::X86),
            "amd64" => Ok(Self::Amd64),
            "arm64" => Ok(Self::Arm64),
            "arm" => Ok(Self::Arm),
            other => Err(format!(
                "unknown architecture '{other}' (expected 386, amd64, arm64 or arm)"
            )),
        }
    }
}

/// Operating systems built by default.
pub const DEFAULT_OS: [Os; 3] = [Os::Darwin, Os::Linux, Os::Windows];

/// Architectures built by default.
pub const DEFAULT_ARCH: [Arch; 2] = [Arch::X86, Arch::Amd64];

/// One matrix entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Target {
    /// Operating system
    pub os: Os,
    /// CPU architecture
    pub arch: Arch,
}

impl Target {
    /// Creates a target from its parts.
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl FromStr for Target {
    type Err = String;

    /// Parses `linux-amd64` or `linux/amd64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (os, arch) = s
            .split_once(['-', '/'])
            .ok_or_else(|| format!("invalid target '{s}' (expected OS-ARCH, e.g. linux-amd64)"))?;
        Ok(Self::new(os.parse()?, arch.parse()?))
    }
}

/// Expands OS and architecture lists into the matrix, OS-major.
///
/// Duplicate entries are dropped, keeping first occurrence order.
pub fn matrix(oses: &[Os], arches: &[Arch]) -> Vec<Target> {
    let mut targets: Vec<Target> = Vec::with_capacity(oses.len() * arches.len());
    for os in oses {
        for arch in arches {
            let target = Target::new(*os, *arch);
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
    }
    targets
}
