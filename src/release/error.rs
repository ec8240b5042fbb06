//! Error types for the release pipeline.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};
use thiserror::Error;

/// Result type alias for release pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building release artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// Free-form failure, usually produced by [`bail!`](crate::bail)
    #[error("{0}")]
    GenericError(String),

    /// Filesystem operation failed on a specific path
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying IO error
        error: io::Error,
    },

    /// External command could not be started
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program name
        command: String,
        /// Spawn error
        error: io::Error,
    },

    /// External command ran but exited unsuccessfully
    #[error("`{command}` {status}")]
    CommandStatus {
        /// Program name
        command: String,
        /// Exit status reported by the OS
        status: ExitStatus,
    },

    /// Required tool is missing from PATH
    #[error("{tool} not found in PATH ({hint})")]
    ToolNotFound {
        /// Program that was looked up
        tool: String,
        /// What the tool is needed for
        hint: &'static str,
    },

    /// Zip archive writer error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Background task panicked or was cancelled
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// One or more matrix entries failed under `--keep-going`
    #[error("{} of {total} targets failed: {}", .failed.len(), .failed.join(", "))]
    TargetsFailed {
        /// Failed targets and their errors, one line each
        failed: Vec<String>,
        /// Number of targets attempted
        total: usize,
    },
}

impl Error {
    /// Exit code of the failing external command, if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandStatus { status, .. } => status.code(),
            _ => None,
        }
    }
}

/// Attach path context to filesystem results.
pub trait ErrorExt<T> {
    /// Wraps the error with what was being done and which path was involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Convert options and foreign errors into [`Error::GenericError`] with a message.
pub trait Context<T> {
    /// Adds a message describing what failed.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::release::Error::GenericError(format!($($arg)*)))
    };
}
