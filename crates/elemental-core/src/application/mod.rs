//! Application layer for Elemental.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! derivation logic itself. All derivation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Artifact, EmitReport, SPEC_FILE_NAME, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{AnswerSource, Filesystem};

pub use error::ApplicationError;
