//! Cross-compilation of one matrix entry.

use super::command::{display_command, run_tool, tool_name};
use crate::{
    bail,
    release::{Settings, descriptor::BuildDescriptor, error::Result},
};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Compiles the binary for `descriptor` into the release directory.
///
/// Runs `<compiler> build -ldflags "<flags>" -o <binary> <package>` from the
/// project root with `GOOS`/`GOARCH` set for the target.
///
/// # Returns
///
/// Path of the compiled binary.
pub async fn compile(
    settings: &Settings,
    compiler: &Path,
    descriptor: &BuildDescriptor,
) -> Result<PathBuf> {
    let output = descriptor.binary_path(settings.release_dir());
    let mut command = compile_command(settings, compiler, descriptor);

    let name = tool_name(compiler);
    let display = display_command(&name, command.as_std().get_args());
    run_tool(&mut command, &name, &display).await?;

    if !tokio::fs::try_exists(&output).await.unwrap_or(false) {
        bail!(
            "{} succeeded but did not write {}",
            name,
            output.display()
        );
    }

    Ok(output)
}

/// Builds the toolchain invocation for one entry.
fn compile_command(settings: &Settings, compiler: &Path, descriptor: &BuildDescriptor) -> Command {
    let toolchain = settings.toolchain();
    let target = descriptor.target();
    let ldflags = settings
        .version()
        .ldflags(&toolchain.version_symbol, &toolchain.build_time_symbol);

    let mut command = Command::new(compiler);
    command
        .current_dir(settings.root())
        .envs(&toolchain.env)
        .env("GOOS", target.os.as_str())
        .env("GOARCH", target.arch.as_str())
        .arg("build")
        .arg("-ldflags")
        .arg(ldflags)
        .arg("-o")
        .arg(descriptor.binary_path(settings.release_dir()))
        .arg(settings.package());
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::{Arch, Os, SettingsBuilder, Target, ToolchainSettings, VersionContext};
    use std::ffi::OsStr;

    #[test]
    fn command_sets_target_env_and_ldflags() {
        let tmp = tempfile::tempdir().unwrap();
        let mut toolchain = ToolchainSettings::default();
        toolchain.env.insert("CGO_ENABLED".into(), "0".into());
        toolchain.env.insert("GOOS".into(), "plan9".into());

        let settings = SettingsBuilder::new()
            .root(tmp.path())
            .toolchain(toolchain)
            .version(VersionContext::new("v1.2.3", 1_700_000_000))
            .build()
            .unwrap();
        let descriptor = settings.descriptor(Target::new(Os::Windows, Arch::Amd64));

        let command = compile_command(&settings, Path::new("go"), &descriptor);
        let std = command.as_std();

        let args: Vec<&OsStr> = std.get_args().collect();
        let expected_out = tmp
            .path()
            .join("ci/release/slangd-v1_2_3-windows-amd64.exe");
        assert_eq!(
            args,
            vec![
                OsStr::new("build"),
                OsStr::new("-ldflags"),
                OsStr::new("-X main.Version=v1.2.3 -X main.BuildTime=1700000000 "),
                OsStr::new("-o"),
                expected_out.as_os_str(),
                OsStr::new("./cmd/slangd"),
            ]
        );

        // GOOS from the matrix wins over configured env
        let envs: Vec<(&OsStr, Option<&OsStr>)> = std.get_envs().collect();
        assert!(envs.contains(&(OsStr::new("GOOS"), Some(OsStr::new("windows")))));
        assert!(envs.contains(&(OsStr::new("GOARCH"), Some(OsStr::new("amd64")))));
        assert!(envs.contains(&(OsStr::new("CGO_ENABLED"), Some(OsStr::new("0")))));
        assert!(!envs.contains(&(OsStr::new("GOOS"), Some(OsStr::new("plan9")))));
        assert_eq!(std.get_current_dir(), Some(tmp.path()));
    }
}
