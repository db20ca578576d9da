//! Demo story knobs: one live-editable control per property, plus the
//! attribute string that feeds them into the demo element.

use heck::ToKebabCase;
use serde::{Deserialize, Serialize};

use crate::domain::{entities::property::PropertySchema, value_objects::PropertyType};

/// Knob function used to expose a property in the story harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knob {
    Text,
    Boolean,
    Number,
    Object,
    Array,
    Date,
}

impl Knob {
    pub const fn for_type(kind: PropertyType) -> Self {
        match kind {
            PropertyType::String => Self::Text,
            PropertyType::Boolean => Self::Boolean,
            PropertyType::Number => Self::Number,
            PropertyType::Object => Self::Object,
            PropertyType::Array => Self::Array,
            PropertyType::Date => Self::Date,
        }
    }

    pub const fn function(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
            Self::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryKnobs {
    #[serde(rename = "storyPropDeclaration")]
    declarations: String,
    #[serde(rename = "storyHTMLProps")]
    html_attributes: String,
}

impl StoryKnobs {
    pub fn build(schema: &PropertySchema) -> Self {
        let declarations = schema
            .iter()
            .map(|property| {
                let knob = Knob::for_type(property.kind());
                format!(
                    "  const {name} = {function}({label}, {value});\n",
                    name = property.name(),
                    function = knob.function(),
                    label = js_string(property.name()),
                    value = js_string(property.default_value()),
                )
            })
            .collect();

        let html_attributes = schema
            .iter()
            .map(|property| {
                format!(
                    "{attribute}=\"${{{name}}}\"",
                    attribute = property.name().to_kebab_case(),
                    name = property.name(),
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            declarations,
            html_attributes,
        }
    }

    /// `const` knob declarations, one line per property.
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// `attr="${local}"` fragments joined by `"; "`.
    pub fn html_attributes(&self) -> &str {
        &self.html_attributes
    }
}

/// Double-quoted JS string literal.
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
