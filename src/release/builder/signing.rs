//! Authenticode signing of Windows binaries.
//!
//! osslsigncode writes the signed binary to a separate `signed_` file next to
//! the input; once it succeeds the unsigned binary is removed and the signed
//! one takes its name.

use super::command::{display_command, run_tool, tool_name};
use crate::release::{
    Settings,
    descriptor::BuildDescriptor,
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use std::{ffi::OsString, path::Path};
use tokio::process::Command;

/// Placeholder logged instead of the signing password.
const REDACTED: &str = "<hidden>";

/// Signs the compiled binary for `descriptor` in place.
///
/// # Errors
///
/// Fails when no password is configured, when the signing tool fails, or when
/// the signed file can't replace the unsigned one.
pub async fn sign_binary(
    settings: &Settings,
    signer: &Path,
    descriptor: &BuildDescriptor,
) -> Result<()> {
    let password = settings
        .signing()
        .password
        .as_ref()
        .context("signing requested without a signing password")?;

    let release_dir = settings.release_dir();
    let unsigned = descriptor.binary_path(release_dir);
    let signed = descriptor.signed_binary_path(release_dir);

    // leftovers from an interrupted run would make the signer refuse to write
    fs::remove_file_if_exists(&signed).await?;

    let args = sign_args(settings, descriptor, password.expose());
    let name = tool_name(signer);
    let display = display_command(&name, sign_args(settings, descriptor, REDACTED));

    let mut command = Command::new(signer);
    command.current_dir(settings.root()).args(&args);
    run_tool(&mut command, &name, &display).await?;

    tokio::fs::remove_file(&unsigned)
        .await
        .fs_context("removing unsigned binary", &unsigned)?;
    tokio::fs::rename(&signed, &unsigned)
        .await
        .fs_context("moving signed binary into place", &signed)?;

    log::info!("✓ Signed {}", descriptor.binary_file());
    Ok(())
}

/// Arguments for `osslsigncode sign`.
fn sign_args(settings: &Settings, descriptor: &BuildDescriptor, password: &str) -> Vec<OsString> {
    let release_dir = settings.release_dir();
    vec![
        "sign".into(),
        "-pkcs12".into(),
        settings.certificate_path().into_os_string(),
        "-pass".into(),
        password.into(),
        "-in".into(),
        descriptor.binary_path(release_dir).into_os_string(),
        "-out".into(),
        descriptor.signed_binary_path(release_dir).into_os_string(),
    ]
}
