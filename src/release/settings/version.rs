//! Version and build-time values embedded into every release binary.

use chrono::{DateTime, Utc};

/// Environment variable that pins the build timestamp for reproducible builds.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Version string and build timestamp of a release run.
///
/// Both values are passed to the toolchain as link-time constants and the
/// version also appears in every artifact name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionContext {
    version: String,
    build_time: i64,
}

impl VersionContext {
    /// Creates a context with an explicit build time (seconds since the Unix epoch).
    pub fn new(version: impl Into<String>, build_time: i64) -> Self {
        Self {
            version: version.into(),
            build_time,
        }
    }

    /// Creates a context stamped with the current time, or `SOURCE_DATE_EPOCH` when set.
    pub fn now(version: impl Into<String>) -> Self {
        let build_time = resolve_build_time(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref());
        Self::new(version, build_time)
    }

    /// The version exactly as supplied by the caller.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Version with dots replaced by underscores, as used in file names.
    pub fn file_version(&self) -> String {
        self.version.replace('.', "_")
    }

    /// Build time in whole seconds since the Unix epoch.
    pub fn build_time(&self) -> i64 {
        self.build_time
    }

    /// Build time rendered as RFC 3339, if representable.
    pub fn build_time_rfc3339(&self) -> Option<String> {
        DateTime::<Utc>::from_timestamp(self.build_time, 0).map(|t| t.to_rfc3339())
    }

    /// Whether the version follows the `vX.Y.Z` convention.
    pub fn is_conventional(&self) -> bool {
        let bare = self.version.strip_prefix('v').unwrap_or(&self.version);
        semver::Version::parse(bare).is_ok()
    }

    /// Linker flags injecting the version and build time.
    pub fn ldflags(&self, version_symbol: &str, build_time_symbol: &str) -> String {
        format!(
            "-X {}={} -X {}={} ",
            version_symbol, self.version, build_time_symbol, self.build_time
        )
    }
}

/// Picks the build time: a valid `SOURCE_DATE_EPOCH` value wins over the clock.
pub fn resolve_build_time(source_date_epoch: Option<&str>) -> i64 {
    match source_date_epoch.map(str::trim) {
        Some(value) if !value.is_empty() => match value.parse::<i64>() {
            Ok(secs) => {
                log::debug!("Using {}={} as build time", SOURCE_DATE_EPOCH, secs);
                secs
            }
            Err(e) => {
                log::warn!(
                    "Ignoring invalid {} value '{}': {}",
                    SOURCE_DATE_EPOCH,
                    value,
                    e
                );
                Utc::now().timestamp()
            }
        },
        _ => Utc::now().timestamp(),
    }
}
