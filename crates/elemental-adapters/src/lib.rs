//! Infrastructure adapters for Elemental.
//!
//! This crate implements the ports defined in `elemental-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod answers;
pub mod filesystem;

// Re-export commonly used adapters
pub use answers::{AnswerFormat, FileAnswerSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
