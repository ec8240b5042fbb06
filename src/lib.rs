//! Release builder library for the slangd daemon
//!
//! This library provides the release pipeline used by the `slangd_release`
//! binary:
//! - cross-compiling one binary per (OS, architecture) matrix entry
//! - Authenticode signing of Windows binaries via osslsigncode
//! - zip / tar.gz archiving, checksums and an optional JSON manifest
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod release;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
