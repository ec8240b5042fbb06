//! Command line interface for the slangd release builder.
//!
//! This module wires argument parsing, the release config file and the
//! release pipeline together, and reports progress to the terminal.

mod args;
mod output;

pub use args::{Args, RuntimeConfig, SIGNING_PASSWORD_ENV};
pub use output::OutputManager;

use crate::config::{ReleaseConfig, discover_config};
use crate::error::{CliError, ReleaseError, Result};
use crate::release::{
    ReleaseBuilder, ReleaseReport, SettingsBuilder, SigningPassword, Target, VersionContext,
    settings::{SOURCE_DATE_EPOCH, matrix, resolve_build_time},
};
use path_absolutize::Absolutize;

/// Exit code when no version was given.
pub const USAGE_EXIT_CODE: i32 = -1;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);
    execute(&args).await
}

/// Initializes logging; `RUST_LOG` wins over the verbosity flag.
///
/// Verbose runs log every command line at `info`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

/// Runs a release for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    let runtime = RuntimeConfig::from(args);
    let output = runtime.output();

    let Some(version) = args.release_version.clone() else {
        eprintln!("Usage: slangd_release <VERSION> [SIGNING_PASSWORD]");
        return Ok(USAGE_EXIT_CODE);
    };

    validate_args(args).map_err(|reason| CliError::InvalidArguments { reason })?;

    let root = args.root.absolutize()?.into_owned();
    let config = discover_config(&root, args.config.as_deref())?;

    let build_time = resolve_build_time(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref());
    let version = VersionContext::new(version, build_time);
    if !version.is_conventional() {
        output.warn(&format!(
            "Version '{}' is not a semantic version (expected e.g. v1.2.3)",
            version.version()
        ));
    }

    let targets = select_targets(&config, &args.targets)?;
    let password = args.signing_password.clone().map(SigningPassword::new);
    if password.is_none() && targets.iter().any(|t| t.os.is_windows()) {
        output.verbose("No signing password given - Windows binaries stay unsigned");
    }

    let settings = SettingsBuilder::new()
        .binary_name(config.binary.clone())
        .package(config.package.clone())
        .root(&root)
        .release_dir(
            args.release_dir
                .clone()
                .unwrap_or_else(|| config.release_dir.clone()),
        )
        .matrix(targets)
        .toolchain(config.toolchain.clone())
        .signing(config.signing.clone())
        .signing_password(password)
        .version(version)
        .keep_going(args.keep_going)
        .checksums(args.checksums || config.checksums)
        .manifest_path(args.manifest.clone())
        .build()?;

    output.section(&format!(
        "Releasing {} {} ({} targets)",
        settings.binary_name(),
        settings.version().version(),
        settings.matrix().len()
    ));
    output.verbose(&format!("Release directory: {}", settings.release_dir().display()));

    let builder = ReleaseBuilder::new(settings)?;
    let report = builder.release(output).await?;

    print_summary(output, &report);
    Ok(0)
}

/// Expands the configured matrix, restricted to `requested` when non-empty.
///
/// Requested targets keep the matrix order; targets outside the matrix are an error.
pub fn select_targets(config: &ReleaseConfig, requested: &[Target]) -> Result<Vec<Target>> {
    let full = matrix(&config.os, &config.arch);
    if requested.is_empty() {
        return Ok(full);
    }

    if let Some(unknown) = requested.iter().find(|t| !full.contains(t)) {
        return Err(ReleaseError::Cli(CliError::InvalidArguments {
            reason: format!(
                "target {} is not in the release matrix ({})",
                unknown,
                full.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }));
    }

    Ok(full.into_iter().filter(|t| requested.contains(t)).collect())
}

fn print_summary(output: &OutputManager, report: &ReleaseReport) {
    output.section(&format!(
        "Released {} archives for {}",
        report.artifacts.len(),
        report.version
    ));
    for artifact in &report.artifacts {
        output.indent(&format!("{}  {}", artifact.sha256, artifact.archive));
    }
}

/// Parse arguments without executing (for testing)
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Validate arguments without executing (for testing)
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}
