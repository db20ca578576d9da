//! Core domain layer for Elemental.
//!
//! Pure derivation logic: raw answers in, an `ElementSpecification` out.
//! All I/O happens behind the ports defined in the application layer.
//!
//! - **No I/O**: no filesystem, clock, or environment access
//! - **Deterministic**: the same answers and build info always compile to
//!   the same specification
//! - **Immutable results**: every derived value is Clone + PartialEq
//!
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    BindingSyntax, BuildInfo, ElementIdentity, ElementSpecification, HaxDescriptor, HaxSetting,
    InputMethod, Knob, LibraryFlags, PlannedFile, PropertyDescriptor, PropertySchema,
    RawAnswers, RawProperty, RememberedDefaults, RenderMode, RenderPlan, SassLibrary,
    StoryKnobs, VariantBinding,
    common::RelativePath,
    hax::HAX_WIRING_IMPORT,
    identity::canonical_name,
    property::observer_handler_name,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BaseVariant, License, PropertyType, VariantLibrary};
