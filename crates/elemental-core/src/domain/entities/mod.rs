pub mod answers;
pub mod binding;
pub mod common;
pub mod hax;
pub mod identity;
pub mod library;
pub mod property;
pub mod render_plan;
pub mod specification;
pub mod story;

pub use crate::domain::DomainError;
pub use answers::{BuildInfo, RawAnswers, RememberedDefaults, SassLibrary};
pub use binding::{BindingSyntax, VariantBinding};
pub use hax::{HaxDescriptor, HaxSetting, InputMethod};
pub use identity::ElementIdentity;
pub use library::LibraryFlags;
pub use property::{PropertyDescriptor, PropertySchema, RawProperty};
pub use render_plan::{PlannedFile, RenderMode, RenderPlan};
pub use specification::ElementSpecification;
pub use story::{Knob, StoryKnobs};
