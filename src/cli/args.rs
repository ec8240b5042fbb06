//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! the combinations clap can't express.

use crate::release::Target;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the signing password.
pub const SIGNING_PASSWORD_ENV: &str = "SLANGD_SIGNING_PASSWORD";

/// Release builder for the slangd daemon
#[derive(Parser, Debug)]
#[command(
    name = "slangd_release",
    version,
    about = "Cross-compiles, signs and archives slangd for every release target",
    long_about = "Builds one archive per (OS, architecture) matrix entry in the release directory.

Windows binaries are signed with osslsigncode when a signing password is given.

Usage:
  slangd_release v1.2.3
  slangd_release v1.2.3 \"$CERT_PASSWORD\"
  slangd_release v1.2.3 --target linux-amd64 --checksums

Exit code 0 = every archive exists in the release directory."
)]
pub struct Args {
    /// Version string embedded into the binaries and archive names
    #[arg(value_name = "VERSION")]
    pub release_version: Option<String>,

    /// Password for the code signing certificate; enables Windows signing
    #[arg(
        value_name = "SIGNING_PASSWORD",
        env = SIGNING_PASSWORD_ENV,
        hide_env_values = true
    )]
    pub signing_password: Option<String>,

    /// Release config file, relative to the project root (default: release.toml, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root the toolchain runs in
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Release directory, overriding the config file
    #[arg(short = 'r', long, value_name = "DIR")]
    pub release_dir: Option<PathBuf>,

    /// Build only these matrix entries (OS-ARCH, e.g. linux-amd64); repeatable
    #[arg(short, long = "target", value_name = "OS-ARCH")]
    pub targets: Vec<Target>,

    /// Build the remaining targets after a failure and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,

    /// Write SHA256SUMS into the release directory
    #[arg(long)]
    pub checksums: bool,

    /// Write a JSON manifest of the release to PATH (relative to the project root)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Print the commands being run
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(version) = &self.release_version {
            if version.trim().is_empty() {
                return Err("Version cannot be empty".to_string());
            }
            if version.chars().any(char::is_whitespace) {
                return Err(format!("Version must not contain whitespace: '{version}'"));
            }
            if version.contains(['/', '\\']) {
                return Err(format!(
                    "Version must not contain path separators: '{version}'"
                ));
            }
        }

        if self.signing_password.as_deref() == Some("") {
            return Err("Signing password cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
