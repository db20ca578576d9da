//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "compile an element" or "emit its artifacts".

pub mod scaffold_service;

pub use scaffold_service::{Artifact, EmitReport, SPEC_FILE_NAME, ScaffoldService};
