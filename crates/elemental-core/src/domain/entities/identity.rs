//! Element identity: the canonical custom element name and every name
//! variant templates need.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// All names derived from one custom element name.
///
/// | Field         | `my-widget`  |
/// |---------------|--------------|
/// | `element_name`| `my-widget`  |
/// | `human_name`  | `My widget`  |
/// | `class_name`  | `MyWidget`   |
/// | `camel_name`  | `myWidget`   |
/// | `local_name`  | `widget`     |
/// | `readme_name` | `Widget`     |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIdentity {
    element_name: String,
    human_name: String,
    #[serde(rename = "elementClassName")]
    class_name: String,
    #[serde(rename = "camelCaseName")]
    camel_name: String,
    #[serde(rename = "lowerCaseName")]
    local_name: String,
    readme_name: String,
}

impl ElementIdentity {
    /// Normalize a raw element name and derive its name variants.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` if the raw name is not a hyphenated, lowercase
    /// custom element name.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let element_name = canonical_name(raw)?;

        // canonical_name guarantees at least two segments
        let local_name = element_name
            .split('-')
            .nth(1)
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            human_name: capitalize_first(&element_name.replacen('-', " ", 1)),
            class_name: element_name.to_upper_camel_case(),
            camel_name: element_name.to_lower_camel_case(),
            readme_name: capitalize_first(&local_name),
            local_name,
            element_name,
        })
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn human_name(&self) -> &str {
        &self.human_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn camel_name(&self) -> &str {
        &self.camel_name
    }

    /// The second hyphen segment (`widget` for `my-widget`).
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The local name with its first letter capitalized, used as short label.
    pub fn readme_name(&self) -> &str {
        &self.readme_name
    }
}

/// Validate a raw name, then force it to kebab-case + lowercase.
///
/// The raw value is checked as given, so `MyWidget` or `my_widget` fail
/// rather than being repaired. Idempotent: a canonical name normalizes to
/// itself.
pub fn canonical_name(raw: &str) -> Result<String, DomainError> {
    if !is_custom_element_name(raw) {
        return Err(DomainError::InvalidIdentifier {
            raw: raw.to_string(),
        });
    }

    Ok(raw.to_kebab_case().to_lowercase())
}

/// `segment(-segment)+`, each segment an ASCII lowercase letter followed by
/// lowercase letters or digits.
fn is_custom_element_name(name: &str) -> bool {
    let mut segments = 0;
    for segment in name.split('-') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
