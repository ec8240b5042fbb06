//! Release orchestration and the per-target pipeline steps.
//!
//! # Module Organization
//!
//! - [`archive`] - zip / tar.gz creation with atomic rename
//! - [`checksum`] - SHA256 checksum calculation for archives
//! - `command` - external command execution
//! - `compile` - toolchain invocation
//! - `manifest` - JSON release manifest
//! - [`orchestrator`] - Main [`ReleaseBuilder`] struct
//! - `signing` - Authenticode signing via osslsigncode
//! - [`tool_detection`] - External tool availability checking

pub mod archive;
pub mod checksum;
mod command;
mod compile;
mod manifest;
pub mod orchestrator;
mod signing;
pub mod tool_detection;

pub use checksum::CHECKSUMS_FILE;
pub use orchestrator::{ReleaseBuilder, Step, TargetFailure};
pub use tool_detection::Toolset;
