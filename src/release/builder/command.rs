//! External command execution.

use crate::release::error::{Error, Result};
use std::{ffi::OsStr, path::Path};
use tokio::process::Command;

/// Runs `command` to completion, inheriting stdio.
///
/// `name` identifies the tool in errors and `display` is the human-readable
/// command line logged before running; callers must keep secrets out of it.
pub async fn run_tool(command: &mut Command, name: &str, display: &str) -> Result<()> {
    log::info!("Running {}", display);

    let status = command.status().await.map_err(|error| Error::CommandFailed {
        command: name.to_string(),
        error,
    })?;

    if !status.success() {
        log::debug!("{} exited with {:?}", name, status.code());
        return Err(Error::CommandStatus {
            command: name.to_string(),
            status,
        });
    }

    Ok(())
}

/// Short tool name for messages: the file name of `program`.
pub fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .unwrap_or(program.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Renders a command line for logging.
pub fn display_command<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut line = program.to_string();
    for arg in args {
        let arg = arg.as_ref().to_string_lossy();
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(&arg);
            line.push('"');
        } else {
            line.push_str(&arg);
        }
    }
    line
}
