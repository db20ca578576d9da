//! Element properties: raw prompt entries and the validated, ordered schema.
//!
//! The schema is a single insertion-ordered map. Its ordered view (iteration)
//! and keyed view (lookup by name) are the same structure, and insertion
//! order drives every downstream ordering: binding fragments, knob
//! declarations and the HAX settings lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::PropertyType};

/// One property entry exactly as the prompt collaborator collected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PropertyType,
    /// Default value, kept verbatim (never type-coerced).
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub reflect_to_attribute: bool,
    /// Whether the element should notice changes to this property.
    #[serde(default = "default_observe")]
    pub observer: bool,
}

fn default_observe() -> bool {
    true
}

impl RawProperty {
    pub fn new(name: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            reflect_to_attribute: false,
            observer: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn reflected(mut self) -> Self {
        self.reflect_to_attribute = true;
        self
    }

    pub fn unobserved(mut self) -> Self {
        self.observer = false;
        self
    }
}

/// A validated property.
///
/// Invariant: `observer`, when present, equals `_` + name + `Changed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    name: String,
    #[serde(rename = "type")]
    kind: PropertyType,
    value: String,
    reflect_to_attribute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observer: Option<String>,
}

impl PropertyDescriptor {
    /// Validate a raw entry and derive its observer handler name.
    pub fn from_raw(raw: &RawProperty) -> Result<Self, DomainError> {
        validate_property_name(&raw.name)?;

        Ok(Self {
            name: raw.name.clone(),
            kind: raw.kind,
            value: raw.value.clone(),
            reflect_to_attribute: raw.reflect_to_attribute,
            observer: raw.observer.then(|| observer_handler_name(&raw.name)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyType {
        self.kind
    }

    pub fn default_value(&self) -> &str {
        &self.value
    }

    pub fn reflects_to_attribute(&self) -> bool {
        self.reflect_to_attribute
    }

    pub fn observes_changes(&self) -> bool {
        self.observer.is_some()
    }

    pub fn observer_handler_name(&self) -> Option<&str> {
        self.observer.as_deref()
    }
}

/// `_` + name + `Changed`.
pub fn observer_handler_name(name: &str) -> String {
    format!("_{name}Changed")
}

/// A property name must be one non-empty identifier token.
fn validate_property_name(name: &str) -> Result<(), DomainError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidPropertyName {
            raw: name.to_string(),
        })
    }
}

/// Ordered, name-keyed property schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, PropertyDescriptor>")]
pub struct PropertySchema {
    #[serde(flatten)]
    properties: IndexMap<String, PropertyDescriptor>,
}

impl PropertySchema {
    /// Build a schema from raw entries, preserving input order.
    ///
    /// # Errors
    ///
    /// - `InvalidPropertyName` for an empty or multi-token name
    /// - `DuplicatePropertyName` when two entries share a name; entries are
    ///   never merged or overwritten
    pub fn build(raw: &[RawProperty]) -> Result<Self, DomainError> {
        let mut properties = IndexMap::with_capacity(raw.len());

        for entry in raw {
            let descriptor = PropertyDescriptor::from_raw(entry)?;
            if properties.contains_key(descriptor.name()) {
                return Err(DomainError::DuplicatePropertyName {
                    name: descriptor.name,
                });
            }
            properties.insert(descriptor.name.clone(), descriptor);
        }

        Ok(Self { properties })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Pretty-printed JSON object keyed by property name, in insertion order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl TryFrom<IndexMap<String, PropertyDescriptor>> for PropertySchema {
    type Error = DomainError;

    /// Re-validate a keyed map (e.g. parsed JSON): names must be valid and
    /// every key must match its descriptor's name.
    fn try_from(map: IndexMap<String, PropertyDescriptor>) -> Result<Self, Self::Error> {
        for (key, descriptor) in &map {
            validate_property_name(key)?;
            if key != descriptor.name() {
                return Err(DomainError::InvalidPropertyName { raw: key.clone() });
            }
            let expected = observer_handler_name(key);
            if descriptor
                .observer_handler_name()
                .is_some_and(|observer| observer != expected)
            {
                return Err(DomainError::InvalidPropertyName { raw: key.clone() });
            }
        }
        Ok(Self { properties: map })
    }
}

impl<'a> IntoIterator for &'a PropertySchema {
    type Item = &'a PropertyDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.values()
    }
}
