//! Variant binding generation: how a chosen base class splices template
//! markup and wires each property into it.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::property::PropertySchema,
    value_objects::{BaseVariant, VariantLibrary},
};

/// Native data-binding syntax of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSyntax {
    /// Polymer `[[prop]]`.
    DoubleBracket,
    /// lit-html `${this.prop}`.
    ThisInterpolation,
    /// Slim `{{prop}}`.
    DoubleBrace,
}

impl BindingSyntax {
    /// One binding fragment, including its trailing line break.
    pub fn fragment(self, property: &str) -> String {
        match self {
            Self::DoubleBracket => format!("<div>[[{property}]]</div>\n"),
            Self::ThisInterpolation => format!("<div>${{this.{property}}}</div>\n"),
            Self::DoubleBrace => format!("<div>{{{{{property}}}}}</div>\n"),
        }
    }
}

impl BaseVariant {
    /// The syntactic prefix the rendering stage splices template markup into.
    pub const fn template_entry(self) -> &'static str {
        match self {
            Self::PolymerElement => "static get template() {\n    return html",
            Self::LitElement | Self::RendererLitBinding => "render() {\n    return html",
            Self::SlimBinding => "render(tpl) {\n    this._render",
            Self::VanillaElement | Self::LightWrapper => "get html() {\n    return ",
        }
    }

    /// `None` for the plain variants, which have no native data binding.
    pub const fn binding_syntax(self) -> Option<BindingSyntax> {
        match self {
            Self::PolymerElement => Some(BindingSyntax::DoubleBracket),
            Self::LitElement | Self::RendererLitBinding => Some(BindingSyntax::ThisInterpolation),
            Self::SlimBinding => Some(BindingSyntax::DoubleBrace),
            Self::VanillaElement | Self::LightWrapper => None,
        }
    }

    pub const fn library(self) -> Option<VariantLibrary> {
        match self {
            Self::PolymerElement => Some(VariantLibrary::Polymer),
            Self::LitElement => Some(VariantLibrary::Lit),
            Self::RendererLitBinding => Some(VariantLibrary::SkateRenderer),
            Self::SlimBinding => Some(VariantLibrary::Slim),
            Self::VanillaElement | Self::LightWrapper => None,
        }
    }
}

/// Variant-specific template strings for one schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantBinding {
    #[serde(rename = "templateReturnFunctionPart")]
    template_entry: String,
    #[serde(rename = "propsBindingFactory")]
    bindings: String,
    #[serde(skip)]
    library: Option<VariantLibrary>,
}

impl VariantBinding {
    /// Generate the template entry, the concatenated binding fragments (in
    /// schema order) and the runtime library for `variant`.
    pub fn generate(schema: &PropertySchema, variant: BaseVariant) -> Self {
        let bindings = match variant.binding_syntax() {
            Some(syntax) => schema
                .iter()
                .map(|property| syntax.fragment(property.name()))
                .collect(),
            None => String::new(),
        };

        Self {
            template_entry: variant.template_entry().to_string(),
            bindings,
            library: variant.library(),
        }
    }

    pub fn template_entry(&self) -> &str {
        &self.template_entry
    }

    pub fn bindings(&self) -> &str {
        &self.bindings
    }

    /// Individual fragments, without their line breaks.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.bindings.lines()
    }

    pub fn library(&self) -> Option<VariantLibrary> {
        self.library
    }
}
