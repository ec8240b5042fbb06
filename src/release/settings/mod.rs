//! Configuration structures for release runs.
//!
//! This module provides the matrix types, the version context embedded into
//! binaries, toolchain and signing settings, and a builder producing the
//! immutable [`Settings`] consumed by the release pipeline.

mod builder;
mod core;
mod target;
mod tools;
mod version;

// Re-export all public types
pub use builder::{DEFAULT_BINARY_NAME, DEFAULT_PACKAGE, DEFAULT_RELEASE_DIR, SettingsBuilder};
pub use core::Settings;
pub use target::{Arch, DEFAULT_ARCH, DEFAULT_OS, Os, Target, matrix};
pub use tools::{SigningPassword, SigningSettings, ToolchainSettings};
pub use version::{SOURCE_DATE_EPOCH, VersionContext, resolve_build_time};
