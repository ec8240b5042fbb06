//! Main release orchestration and coordination.
//!
//! This module provides the [`ReleaseBuilder`] orchestrator that runs the
//! per-target pipeline (compile, sign, archive, cleanup) over the matrix.

use super::{
    archive::create_archive,
    checksum::{calculate_sha256, write_checksums},
    compile::compile,
    manifest::write_manifest,
    signing::sign_binary,
    tool_detection::{Toolset, detect_tools},
};
use crate::{
    cli::OutputManager,
    release::{
        Settings, Target,
        artifact::{ReleaseReport, ReleasedArtifact},
        error::{Context, Error, ErrorExt, Result},
        utils::fs,
    },
};
use std::fmt;

/// Pipeline step of a single matrix entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Toolchain invocation
    Compile,
    /// Authenticode signing
    Sign,
    /// Writing the archive
    Archive,
    /// Removing the uncompressed binary
    Cleanup,
    /// Measuring and hashing the archive
    Checksum,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compile => "compile",
            Self::Sign => "sign",
            Self::Archive => "archive",
            Self::Cleanup => "cleanup",
            Self::Checksum => "checksum",
        })
    }
}

/// A matrix entry that failed, and where.
#[derive(Debug)]
pub struct TargetFailure {
    /// Entry that failed.
    pub target: Target,
    /// Step that failed.
    pub step: Step,
    /// Underlying error.
    pub error: Error,
}

impl fmt::Display for TargetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} failed: {}", self.target, self.step, self.error)
    }
}

/// Main release orchestrator.
///
/// Builds every matrix entry sequentially. Each entry runs to completion
/// before the next one starts:
///
/// 1. compile with the version and build time linked in
/// 2. sign (Windows entries, only when a signing password is set)
/// 3. archive into zip (Windows) or tar.gz (everything else)
/// 4. remove the uncompressed binary
/// 5. hash the archive
///
/// The first failure stops the run. With `keep_going` the remaining entries
/// still run and all failures are reported together, except for signing
/// failures, which always stop the run.
///
/// # Examples
///
/// ```no_run
/// use slangd_release::cli::OutputManager;
/// use slangd_release::release::{ReleaseBuilder, SettingsBuilder, VersionContext};
///
/// # async fn example() -> slangd_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .version(VersionContext::now("v1.2.3"))
///     .build()?;
///
/// let builder = ReleaseBuilder::new(settings)?;
/// let report = builder.release(&OutputManager::new(false, false)).await?;
///
/// for artifact in report.artifacts {
///     println!("{} sha256={}", artifact.archive, artifact.sha256);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReleaseBuilder {
    settings: Settings,
    tools: Toolset,
}

impl ReleaseBuilder {
    /// Creates a new release builder, resolving every external tool it needs.
    ///
    /// # Errors
    ///
    /// Fails when the toolchain is missing, or when signing is enabled and the
    /// signer or certificate is missing.
    pub fn new(settings: Settings) -> Result<Self> {
        let tools = detect_tools(&settings)?;
        Ok(Self { settings, tools })
    }

    /// Builds every matrix entry and writes the optional checksum file and manifest.
    pub async fn release(&self, output: &OutputManager) -> Result<ReleaseReport> {
        let release_dir = self.settings.release_dir();
        fs::create_dir_all(release_dir).await?;

        let matrix = self.settings.matrix();
        let total = matrix.len();
        let mut artifacts = Vec::with_capacity(total);
        let mut failed = Vec::new();

        for (index, target) in matrix.iter().enumerate() {
            output.progress(&format!("[{}/{}] Building {}", index + 1, total, target));

            match self.release_target(*target).await {
                Ok(artifact) => {
                    output.success(&format!("{} ({} bytes)", artifact.archive, artifact.size));
                    artifacts.push(artifact);
                }
                Err(failure) => {
                    output.error(&failure.to_string());
                    if !self.settings.keep_going() || failure.step == Step::Sign {
                        return Err(failure.error);
                    }
                    log::warn!("Continuing after failure of {}", failure.target);
                    failed.push(failure.to_string());
                }
            }
        }

        if self.settings.checksums() && !artifacts.is_empty() {
            write_checksums(
                release_dir,
                artifacts
                    .iter()
                    .map(|a| (a.archive.as_str(), a.sha256.as_str())),
            )
            .await?;
        }

        let version = self.settings.version();
        let report = ReleaseReport {
            version: version.version().to_string(),
            build_time: version.build_time(),
            build_time_rfc3339: version.build_time_rfc3339(),
            artifacts,
        };

        if let Some(path) = self.settings.manifest_path() {
            write_manifest(path, &report).await?;
        }

        if !failed.is_empty() {
            return Err(Error::TargetsFailed { failed, total });
        }

        Ok(report)
    }

    /// Runs the full pipeline for one matrix entry.
    pub async fn release_target(
        &self,
        target: Target,
    ) -> std::result::Result<ReleasedArtifact, TargetFailure> {
        let at = move |step: Step| move |error: Error| TargetFailure { target, step, error };

        let release_dir = self.settings.release_dir();
        let descriptor = self.settings.descriptor(target);

        compile(&self.settings, &self.tools.compiler, &descriptor)
            .await
            .map_err(at(Step::Compile))?;

        let signed = self.settings.should_sign(&target);
        if signed {
            let signer = self
                .tools
                .signer
                .as_deref()
                .context("signing tool was not resolved")
                .map_err(at(Step::Sign))?;
            sign_binary(&self.settings, signer, &descriptor)
                .await
                .map_err(at(Step::Sign))?;
        }

        let archive = create_archive(&descriptor, release_dir)
            .await
            .map_err(at(Step::Archive))?;

        let binary = descriptor.binary_path(release_dir);
        tokio::fs::remove_file(&binary)
            .await
            .fs_context("removing uncompressed binary", &binary)
            .map_err(at(Step::Cleanup))?;

        let size = fs::file_size(&archive).await.map_err(at(Step::Checksum))?;
        let sha256 = calculate_sha256(&archive)
            .await
            .map_err(at(Step::Checksum))?;

        log::info!("✓ Released {} for {}", descriptor.archive_file(), target);

        Ok(ReleasedArtifact {
            target,
            archive: descriptor.archive_file().to_string(),
            binary: descriptor.binary_file().to_string(),
            path: archive,
            format: descriptor.format(),
            size,
            sha256,
            signed,
        })
    }
}
