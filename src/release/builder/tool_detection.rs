//! External tool detection and availability checking.
//!
//! Every tool a run needs is resolved before the first matrix entry is built,
//! so a missing signer is reported up front instead of after several targets
//! have already been compiled.

use crate::release::{
    Settings,
    error::{Error, Result},
};
use std::path::PathBuf;

/// Resolved paths of the external tools used by a run.
#[derive(Clone, Debug)]
pub struct Toolset {
    /// Compiler toolchain binary.
    pub compiler: PathBuf,
    /// Signing tool binary, present only when some entry will be signed.
    pub signer: Option<PathBuf>,
}

/// Resolves the tools required by `settings`.
///
/// The signer is only looked up (and the certificate only checked) when at
/// least one matrix entry is a Windows target and a password was supplied.
pub fn detect_tools(settings: &Settings) -> Result<Toolset> {
    let compiler = find_tool(&settings.toolchain().program, "compiling release binaries")?;

    let signer = if settings.signs_anything() {
        let signer = find_tool(&settings.signing().program, "signing Windows binaries")?;

        let certificate = settings.certificate_path();
        if !certificate.is_file() {
            return Err(Error::GenericError(format!(
                "signing certificate not found: {}",
                certificate.display()
            )));
        }
        log::debug!("Using signing certificate {}", certificate.display());

        Some(signer)
    } else {
        log::debug!("No signing password supplied or no Windows target - signing disabled");
        None
    };

    Ok(Toolset { compiler, signer })
}

/// Locates `program` on PATH (or checks it directly when it is a path).
fn find_tool(program: &str, hint: &'static str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", program, e);
            Err(Error::ToolNotFound {
                tool: program.to_string(),
                hint,
            })
        }
    }
}
