//! Pipeline inputs: the raw answers, remembered defaults, and build info.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::property::RawProperty,
    value_objects::{BaseVariant, License},
};

/// Everything the prompt collaborator collected, fully resolved.
///
/// Field names match what the prompts emit, so an answers file can be fed
/// in directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnswers {
    #[serde(rename = "name")]
    pub element_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub copyright_owner: String,
    #[serde(default)]
    pub license: License,
    #[serde(rename = "customElementClass", alias = "variant", default)]
    pub base_variant: BaseVariant,
    #[serde(rename = "addProps", default)]
    pub uses_custom_properties: bool,
    /// Only meaningful when `uses_custom_properties` is set.
    #[serde(rename = "useHAX", default)]
    pub uses_hax: bool,
    #[serde(rename = "propsList", default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub use_sass: bool,
    #[serde(default)]
    pub sass_library: Option<SassLibrary>,
}

impl RawAnswers {
    /// Answers for `element_name` seeded from remembered defaults.
    pub fn with_defaults(element_name: impl Into<String>, defaults: &RememberedDefaults) -> Self {
        Self {
            element_name: element_name.into(),
            description: String::new(),
            author: defaults.author.clone(),
            copyright_owner: defaults.copyright_owner.clone(),
            license: defaults.license,
            base_variant: defaults.base_variant,
            uses_custom_properties: defaults.uses_custom_properties,
            uses_hax: defaults.uses_hax,
            properties: Vec::new(),
            use_sass: defaults.use_sass,
            sass_library: None,
        }
    }

    pub fn variant(mut self, variant: BaseVariant) -> Self {
        self.base_variant = variant;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a property and turn custom properties on.
    pub fn property(mut self, property: RawProperty) -> Self {
        self.uses_custom_properties = true;
        self.properties.push(property);
        self
    }

    pub fn hax(mut self, enabled: bool) -> Self {
        self.uses_hax = enabled;
        self
    }

    pub fn sass(mut self, library: Option<SassLibrary>) -> Self {
        self.use_sass = true;
        self.sass_library = library;
        self
    }

    /// HAX metadata only applies to elements with custom properties.
    pub fn wants_hax(&self) -> bool {
        self.uses_custom_properties && self.uses_hax
    }
}

/// An existing Sass dependency to build styles on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SassLibrary {
    pub pkg: String,
    pub path: String,
}

impl SassLibrary {
    /// The stock `rh-sass` library.
    pub fn rh_sass() -> Self {
        Self {
            pkg: "@rhelements/rh-sass".into(),
            path: "rh-sass/rh-sass".into(),
        }
    }
}

/// Snapshot of previously remembered answers.
///
/// Handed explicitly to the answer source. The core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RememberedDefaults {
    pub author: String,
    pub copyright_owner: String,
    pub license: License,
    pub base_variant: BaseVariant,
    pub use_sass: bool,
    pub uses_custom_properties: bool,
    pub uses_hax: bool,
}

impl Default for RememberedDefaults {
    fn default() -> Self {
        Self {
            author: String::new(),
            copyright_owner: "Red Hat, Inc.".into(),
            license: License::Apache2,
            base_variant: BaseVariant::VanillaElement,
            use_sass: false,
            uses_custom_properties: true,
            uses_hax: false,
        }
    }
}

/// Values that come from the environment rather than the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub year: i32,
    pub generator_version: String,
}

impl BuildInfo {
    pub fn new(year: i32, generator_version: impl Into<String>) -> Self {
        Self {
            year,
            generator_version: generator_version.into(),
        }
    }

    /// Current local year and this crate's version.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year(), crate::VERSION)
    }
}
