//! HAX authoring-system metadata.
//!
//! The descriptor is consumed by the external HAX editor, never rendered as
//! code. `configure` is the exhaustive settings list; `quick` is a curated
//! subset of it for the most common authoring needs (media URLs, alt text,
//! colors).

use heck::ToTitleCase;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        identity::ElementIdentity,
        property::{PropertyDescriptor, PropertySchema},
    },
    value_objects::PropertyType,
};

const DEFAULT_ICON: &str = "icons:android";
const DATE_ICON: &str = "icons:date-range";
const LINK_ICON: &str = "icons:link";
const ALT_ICON: &str = "icons:accessibility";
const COLOR_ICON: &str = "editor:format-color-fill";
const GIZMO_COLOR: &str = "green";
const HANDLE_PLACEHOLDER: &str = "todo:read-the-docs-for-usage";

/// Import line that wires an element into HAX.
pub const HAX_WIRING_IMPORT: &str =
    r#"import { HAXWiring } from "../hax-body-behaviors/lib/HAXWiring.js""#;

/// Editor widget HAX uses for a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    Textfield,
    Boolean,
    Array,
    Datepicker,
    Alt,
    Colorpicker,
}

impl InputMethod {
    /// Type-derived input method and icon.
    ///
    /// Objects get the array editor; HAX has no dedicated object editor.
    fn for_type(kind: PropertyType) -> (Self, &'static str) {
        match kind {
            PropertyType::Boolean => (Self::Boolean, DEFAULT_ICON),
            PropertyType::Array | PropertyType::Object => (Self::Array, DEFAULT_ICON),
            PropertyType::Date => (Self::Datepicker, DATE_ICON),
            PropertyType::String | PropertyType::Number => (Self::Textfield, DEFAULT_ICON),
        }
    }
}

/// One editable property in the HAX settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaxSetting {
    pub property: String,
    pub title: String,
    pub description: String,
    pub input_method: InputMethod,
    pub required: bool,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<String>,
}

/// Name-based guesses for common properties. Best-effort classification:
/// an unmatched name keeps its type-derived defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameHeuristic {
    Url,
    Alt,
    Color,
}

impl NameHeuristic {
    /// Evaluated in priority order; first match wins.
    fn classify(name: &str) -> Option<Self> {
        match name {
            "source" | "src" | "url" => Some(Self::Url),
            "alt" => Some(Self::Alt),
            "color" | "primaryColor" | "accentColor" => Some(Self::Color),
            _ => None,
        }
    }

    fn apply(self, setting: &mut HaxSetting) {
        match self {
            Self::Url => {
                setting.validation_type = Some("url".into());
                setting.required = true;
                setting.icon = LINK_ICON.into();
            }
            Self::Alt => {
                setting.input_method = InputMethod::Alt;
                setting.required = true;
                setting.icon = ALT_ICON.into();
            }
            Self::Color => {
                setting.input_method = InputMethod::Colorpicker;
                setting.icon = COLOR_ICON.into();
            }
        }
    }
}

impl HaxSetting {
    /// Derive a setting for one property.
    ///
    /// Returns the setting and whether it belongs in the quick list.
    fn derive(property: &PropertyDescriptor) -> (Self, bool) {
        let (input_method, icon) = InputMethod::for_type(property.kind());
        let mut setting = Self {
            property: property.name().to_string(),
            title: property.name().to_title_case(),
            description: String::new(),
            input_method,
            required: false,
            icon: icon.to_string(),
            validation_type: None,
        };

        let heuristic = NameHeuristic::classify(property.name());
        if let Some(heuristic) = heuristic {
            heuristic.apply(&mut setting);
        }
        (setting, heuristic.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GizmoHandle {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GizmoMeta {
    pub author: String,
    pub owner: String,
}

/// How the element presents itself in the HAX element picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gizmo {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub groups: IndexSet<String>,
    pub handles: Vec<GizmoHandle>,
    pub meta: GizmoMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaxSettings {
    pub quick: Vec<HaxSetting>,
    pub configure: Vec<HaxSetting>,
    pub advanced: Vec<HaxSetting>,
}

/// Full HAX descriptor for an element.
///
/// Invariant: every setting in `settings.quick` also appears in
/// `settings.configure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaxDescriptor {
    pub can_scale: bool,
    pub can_position: bool,
    pub can_edit_source: bool,
    pub gizmo: Gizmo,
    pub settings: HaxSettings,
}

impl HaxDescriptor {
    /// Build the descriptor from identity fields and the property schema.
    pub fn synthesize(
        identity: &ElementIdentity,
        description: &str,
        author: &str,
        owner: &str,
        schema: &PropertySchema,
    ) -> Self {
        let mut settings = HaxSettings::default();
        for property in schema {
            let (setting, quick) = HaxSetting::derive(property);
            if quick {
                settings.quick.push(setting.clone());
            }
            settings.configure.push(setting);
        }

        Self {
            can_scale: true,
            can_position: true,
            can_edit_source: false,
            gizmo: Gizmo {
                title: identity.human_name().to_string(),
                description: description.to_string(),
                icon: DEFAULT_ICON.into(),
                color: GIZMO_COLOR.into(),
                groups: IndexSet::from([identity.readme_name().to_string()]),
                handles: vec![GizmoHandle {
                    kind: HANDLE_PLACEHOLDER.into(),
                }],
                meta: GizmoMeta {
                    author: author.to_string(),
                    owner: owner.to_string(),
                },
            },
            settings,
        }
    }

    pub fn quick(&self) -> &[HaxSetting] {
        &self.settings.quick
    }

    pub fn configure(&self) -> &[HaxSetting] {
        &self.settings.configure
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
