//! Top-level error types for the release CLI.
//!
//! Domain failures from the release pipeline are wrapped in [`ReleaseError`]
//! together with argument and configuration errors raised by the CLI layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Release configuration could not be parsed
    #[error("invalid release config {path}: {source}")]
    Config {
        /// Config file that failed to parse
        path: PathBuf,
        /// Parser error
        source: toml::de::Error,
    },

    /// Release pipeline errors
    #[error("Release error: {0}")]
    Release(#[from] crate::release::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Process exit code for this error.
    ///
    /// A failing external command passes its own exit code through; any other
    /// error exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Release(e) => e.exit_code().unwrap_or(1),
            _ => 1,
        }
    }
}
