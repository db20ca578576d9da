//! Application layer errors.
//!
//! These errors represent failures in orchestration, not derivation logic.
//! Input validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading answers or writing artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The answers could not be read.
    #[error("Could not load answers from {source_name}: {reason}")]
    AnswerSource { source_name: String, reason: String },

    /// The answers were read but do not describe an element.
    #[error("Invalid answers in {source_name}: {reason}")]
    MalformedAnswers { source_name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A derived artifact could not be serialized.
    #[error("Failed to serialize {artifact}: {reason}")]
    Serialization { artifact: &'static str, reason: String },

    /// Element directory already exists at target location.
    #[error("Element already exists at {path}")]
    ElementExists { path: PathBuf },

    /// Shared in-memory state was poisoned.
    #[error("Filesystem lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AnswerSource { source_name, .. } => vec![
                format!("Check that {source_name} exists and is readable"),
                "Answers files may be JSON (.json) or TOML (.toml)".into(),
            ],
            Self::MalformedAnswers { .. } => vec![
                "Only the documented answer keys are accepted, and `name` is required".into(),
                "Use --answers-format if the extension does not match the content".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ElementExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite the derived files".into(),
                "Choose a different element name or --out directory".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AnswerSource { .. } => ErrorCategory::NotFound,
            Self::MalformedAnswers { .. } | Self::ElementExists { .. } => {
                ErrorCategory::Validation
            }
            Self::FilesystemError { .. }
            | Self::Serialization { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
