//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `elemental-adapters` crate provides implementations.

use crate::domain::{RawAnswers, RememberedDefaults};
use crate::error::ElementalResult;
use std::path::Path;

/// Port for obtaining the user's answers.
///
/// Implemented by:
/// - `elemental_adapters::answers::FileAnswerSource` (JSON/TOML answers file)
/// - `MockAnswerSource` (generated by mockall, unit tests only)
///
/// Interactive prompting would be another implementation; the core only sees
/// the resolved `RawAnswers`.
#[cfg_attr(test, mockall::automock)]
pub trait AnswerSource: Send + Sync {
    /// Produce a complete answer set, filling gaps from `defaults`.
    fn load(&self, defaults: &RememberedDefaults) -> ElementalResult<RawAnswers>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `elemental_adapters::filesystem::LocalFilesystem` (production)
/// - `elemental_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ElementalResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ElementalResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ElementalResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ElementalResult<()>;
}
