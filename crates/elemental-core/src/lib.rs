//! Elemental Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Elemental, a
//! scaffolding-configuration compiler for web-component elements, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          elemental-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: AnswerSource, Filesystem)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   elemental-adapters (Infrastructure)   │
//! │ (FileAnswerSource, LocalFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ElementIdentity, PropertySchema, HAX)  │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use elemental_core::prelude::*;
//!
//! let answers = RawAnswers::with_defaults("my-widget", &RememberedDefaults::default())
//!     .variant(BaseVariant::LitElement)
//!     .property(RawProperty::new("title", PropertyType::String));
//!
//! let spec = ElementSpecification::compile(&answers, &BuildInfo::new(2024, "0.1.0")).unwrap();
//! assert_eq!(spec.class_name(), "MyWidget");
//! assert_eq!(spec.bindings(), "<div>${this.title}</div>\n");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{AnswerSource, Filesystem},
    };
    pub use crate::domain::{
        BaseVariant, BuildInfo, ElementIdentity, ElementSpecification, HaxDescriptor, License,
        PropertySchema, PropertyType, RawAnswers, RawProperty, RememberedDefaults, RenderPlan,
        SassLibrary,
    };
    pub use crate::error::{ElementalError, ElementalResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
