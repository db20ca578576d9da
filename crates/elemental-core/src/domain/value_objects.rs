//! Domain value objects: BaseVariant, PropertyType, License, VariantLibrary.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. Every
//! downstream stage dispatches on them with an exhaustive `match`, so adding a
//! variant or property type is a compile-checked change.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` and `FromStr` arms here
//! 3. Add its binding syntax and library in `entities/binding.rs`
//! 4. Done, the compiler points at anything else

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── BaseVariant ──────────────────────────────────────────────────────────────

/// The base class / rendering technology a generated element builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaseVariant {
    /// A pure `HTMLElement` extension, zero dependencies.
    #[default]
    #[serde(rename = "HTMLElement")]
    VanillaElement,
    /// `RHElement`, a lightweight wrapper on vanilla.
    #[serde(rename = "RHElement")]
    LightWrapper,
    /// SlimJS, small with `{{ }}` data binding.
    #[serde(rename = "Slim")]
    SlimBinding,
    /// SkateJS with the lit-html renderer.
    #[serde(rename = "SkateJS")]
    RendererLitBinding,
    #[serde(rename = "LitElement")]
    LitElement,
    /// Polymer 3.
    #[serde(rename = "PolymerElement")]
    PolymerElement,
}

impl BaseVariant {
    pub const ALL: [BaseVariant; 6] = [
        Self::VanillaElement,
        Self::LightWrapper,
        Self::SlimBinding,
        Self::RendererLitBinding,
        Self::LitElement,
        Self::PolymerElement,
    ];

    /// Stable identifier, also the stem of the variant's source template.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VanillaElement => "HTMLElement",
            Self::LightWrapper => "RHElement",
            Self::SlimBinding => "Slim",
            Self::RendererLitBinding => "SkateJS",
            Self::LitElement => "LitElement",
            Self::PolymerElement => "PolymerElement",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::VanillaElement => "VanillaJS, a pure HTMLElement extension, 0 dependencies",
            Self::LightWrapper => "RHElement, lightweight wrapper on Vanilla, 1 dependency",
            Self::SlimBinding => "SlimJS, data binding +, incredibly small",
            Self::RendererLitBinding => "SkateJS + lit-html, data binding ++, very small",
            Self::LitElement => "LitElement, data binding ++, very small",
            Self::PolymerElement => {
                "Polymer (3), data binding +++, utilities to build complex things, relatively small"
            }
        }
    }
}

impl fmt::Display for BaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "htmlelement" | "vanilla" | "vanilla-element" => Ok(Self::VanillaElement),
            "rhelement" | "light-wrapper" => Ok(Self::LightWrapper),
            "slim" | "slimjs" | "slim-binding" => Ok(Self::SlimBinding),
            "skatejs" | "skate" | "renderer-lit-binding" => Ok(Self::RendererLitBinding),
            "litelement" | "lit" | "lit-element" => Ok(Self::LitElement),
            "polymerelement" | "polymer" | "polymer-element" => Ok(Self::PolymerElement),
            other => Err(DomainError::UnknownChoice {
                field: "base variant",
                value: other.to_string(),
            }),
        }
    }
}

// ── PropertyType ─────────────────────────────────────────────────────────────

/// The data type of an element property, as the element uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    String,
    Boolean,
    Number,
    Object,
    Array,
    Date,
}

impl PropertyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(Self::String),
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" | "num" => Ok(Self::Number),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "date" => Ok(Self::Date),
            other => Err(DomainError::UnknownChoice {
                field: "property type",
                value: other.to_string(),
            }),
        }
    }
}

// ── License ──────────────────────────────────────────────────────────────────

/// Software license for the generated element (SPDX identifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
}

impl License {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache2 => "Apache-2.0",
            Self::Mit => "MIT",
            Self::Bsd3Clause => "BSD-3-Clause",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apache-2.0" | "apache2" | "apache" => Ok(Self::Apache2),
            "mit" => Ok(Self::Mit),
            "bsd-3-clause" | "bsd3" | "bsd" => Ok(Self::Bsd3Clause),
            other => Err(DomainError::UnknownChoice {
                field: "license",
                value: other.to_string(),
            }),
        }
    }
}

// ── VariantLibrary ───────────────────────────────────────────────────────────

/// The runtime package a variant needs declared as a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantLibrary {
    Polymer,
    Lit,
    Slim,
    SkateRenderer,
}

impl VariantLibrary {
    pub const fn package(&self) -> &'static str {
        match self {
            Self::Polymer => "@polymer/polymer",
            Self::Lit => "@polymer/lit-element",
            Self::Slim => "slim-js",
            Self::SkateRenderer => "@skatejs/renderer-lit-html",
        }
    }
}

impl fmt::Display for VariantLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}
