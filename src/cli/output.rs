//! Styled terminal output for the release CLI.

use console::{Term, style};

/// Writes status lines to the terminal.
///
/// Progress, success and section lines go to stdout; warnings and errors go
/// to stderr. `quiet` silences everything except errors, `verbose` enables
/// the extra detail lines. Write failures (closed pipe, etc.) are ignored.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Returns true when verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.is_verbose() {
            stdout(&format!("  {}", style(message).dim()));
        }
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            stdout(&format!("{} {}", style("→").cyan(), message));
        }
    }

    /// Completed step.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            stdout(&format!("{} {}", style("✓").green(), message));
        }
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            stderr(&format!("{} {}", style("⚠").yellow(), message));
        }
    }

    /// Failure. Printed even in quiet mode.
    pub fn error(&self, message: &str) {
        stderr(&format!("{} {}", style("✗").red(), message));
    }

    /// Section header.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            stdout("");
            stdout(&style(title).bold().to_string());
        }
    }

    pub fn indent(&self, message: &str) {
        if !self.quiet {
            stdout(&format!("  {message}"));
        }
    }
}

fn stdout(line: &str) {
    let _ = Term::stdout().write_line(line);
}

fn stderr(line: &str) {
    let _ = Term::stderr().write_line(line);
}
