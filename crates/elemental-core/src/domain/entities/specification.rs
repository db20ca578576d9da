//! The compiled element specification.
//!
//! `ElementSpecification::compile` runs every derivation stage once, in
//! dependency order:
//!
//! ```text
//! RawAnswers ─► identity ─► schema ─┬─► variant binding
//!                                   ├─► HAX descriptor (optional)
//!                                   ├─► story knobs
//!                                   └─► library flags, render plan
//! ```
//!
//! Any stage failing aborts the whole compile; there is no partial result.

use serde::Serialize;

use crate::domain::{
    entities::{
        answers::{BuildInfo, RawAnswers},
        binding::VariantBinding,
        hax::{HAX_WIRING_IMPORT, HaxDescriptor},
        identity::ElementIdentity,
        library::LibraryFlags,
        property::PropertySchema,
        render_plan::RenderPlan,
        story::StoryKnobs,
    },
    error::DomainError,
    value_objects::{BaseVariant, License},
};

/// Everything a renderer needs to produce one element skeleton.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpecification {
    identity: ElementIdentity,
    description: String,
    author: String,
    copyright_owner: String,
    license: License,
    variant: BaseVariant,
    uses_custom_properties: bool,
    schema: PropertySchema,
    binding: VariantBinding,
    hax: Option<HaxDescriptor>,
    story: StoryKnobs,
    library_flags: LibraryFlags,
    use_sass: bool,
    render_plan: RenderPlan,
    build: BuildInfo,
}

impl ElementSpecification {
    /// Compile raw answers into a specification.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` when the element name is not a valid custom element name
    /// - `InvalidPropertyName` / `DuplicatePropertyName` from the schema
    pub fn compile(answers: &RawAnswers, build: &BuildInfo) -> Result<Self, DomainError> {
        let identity = ElementIdentity::normalize(&answers.element_name)?;

        // disabled properties discard whatever entries came along
        let schema = if answers.uses_custom_properties {
            PropertySchema::build(&answers.properties)?
        } else {
            PropertySchema::empty()
        };

        let binding = VariantBinding::generate(&schema, answers.base_variant);

        let hax = answers.wants_hax().then(|| {
            HaxDescriptor::synthesize(
                &identity,
                &answers.description,
                &answers.author,
                &answers.copyright_owner,
                &schema,
            )
        });

        let story = StoryKnobs::build(&schema);
        let library_flags = LibraryFlags::derive(
            answers.use_sass,
            answers.sass_library.as_ref(),
            binding.library(),
        );
        let render_plan = RenderPlan::for_element(&identity, answers)?;

        Ok(Self {
            identity,
            description: answers.description.clone(),
            author: answers.author.clone(),
            copyright_owner: answers.copyright_owner.clone(),
            license: answers.license,
            variant: answers.base_variant,
            uses_custom_properties: answers.uses_custom_properties,
            schema,
            binding,
            hax,
            story,
            library_flags,
            use_sass: answers.use_sass,
            render_plan,
            build: build.clone(),
        })
    }

    pub fn identity(&self) -> &ElementIdentity {
        &self.identity
    }

    pub fn element_name(&self) -> &str {
        self.identity.element_name()
    }

    pub fn human_name(&self) -> &str {
        self.identity.human_name()
    }

    pub fn class_name(&self) -> &str {
        self.identity.class_name()
    }

    pub fn camel_name(&self) -> &str {
        self.identity.camel_name()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn copyright_owner(&self) -> &str {
        &self.copyright_owner
    }

    pub fn license(&self) -> License {
        self.license
    }

    pub fn variant(&self) -> BaseVariant {
        self.variant
    }

    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    pub fn properties_json(&self) -> serde_json::Result<String> {
        self.schema.to_json_pretty()
    }

    pub fn hax(&self) -> Option<&HaxDescriptor> {
        self.hax.as_ref()
    }

    /// Pretty HAX JSON, `None` when HAX is off.
    pub fn hax_json(&self) -> Option<serde_json::Result<String>> {
        self.hax.as_ref().map(HaxDescriptor::to_json_pretty)
    }

    /// Import line for the HAX wiring helper, empty when HAX is off.
    pub fn includes(&self) -> &'static str {
        if self.hax.is_some() { HAX_WIRING_IMPORT } else { "" }
    }

    pub fn template_entry(&self) -> &str {
        self.binding.template_entry()
    }

    pub fn bindings(&self) -> &str {
        self.binding.bindings()
    }

    pub fn story_declarations(&self) -> &str {
        self.story.declarations()
    }

    pub fn story_attributes(&self) -> &str {
        self.story.html_attributes()
    }

    pub fn library_flags(&self) -> &LibraryFlags {
        &self.library_flags
    }

    pub fn use_sass(&self) -> bool {
        self.use_sass
    }

    pub fn render_plan(&self) -> &RenderPlan {
        &self.render_plan
    }

    pub fn year(&self) -> i32 {
        self.build.year
    }

    pub fn generator_version(&self) -> &str {
        &self.build.generator_version
    }

    /// Flat JSON object handed to the template engine.
    pub fn render_context(&self) -> serde_json::Result<serde_json::Value> {
        let context = RenderContext {
            year: self.build.year,
            generator_version: &self.build.generator_version,
            name: self.identity.element_name(),
            identity: &self.identity,
            description: &self.description,
            author: &self.author,
            copyright_owner: &self.copyright_owner,
            license: self.license,
            custom_element_class: self.variant,
            add_props: self.uses_custom_properties,
            props_list: &self.schema,
            props_list_string: self.schema.to_json_pretty()?,
            use_hax: self.hax.is_some(),
            hax_list: self.hax.as_ref(),
            hax_list_string: match &self.hax {
                Some(hax) => hax.to_json_pretty()?,
                None => "{}".to_string(),
            },
            includes_string: self.includes(),
            connected_string: "",
            constructor_string: "",
            binding: &self.binding,
            story: &self.story,
            use_sass: self.use_sass,
            library_flags: &self.library_flags,
        };
        serde_json::to_value(context)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderContext<'a> {
    year: i32,
    generator_version: &'a str,
    name: &'a str,
    #[serde(flatten)]
    identity: &'a ElementIdentity,
    description: &'a str,
    author: &'a str,
    copyright_owner: &'a str,
    license: License,
    custom_element_class: BaseVariant,
    add_props: bool,
    props_list: &'a PropertySchema,
    props_list_string: String,
    #[serde(rename = "useHAX")]
    use_hax: bool,
    #[serde(serialize_with = "object_or_empty")]
    hax_list: Option<&'a HaxDescriptor>,
    hax_list_string: String,
    includes_string: &'a str,
    connected_string: &'a str,
    constructor_string: &'a str,
    #[serde(flatten)]
    binding: &'a VariantBinding,
    #[serde(flatten)]
    story: &'a StoryKnobs,
    use_sass: bool,
    #[serde(flatten)]
    library_flags: &'a LibraryFlags,
}

fn object_or_empty<S: serde::Serializer>(
    hax: &Option<&HaxDescriptor>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    match hax {
        Some(hax) => hax.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{
            answers::{RememberedDefaults, SassLibrary},
            hax::InputMethod,
            property::RawProperty,
        },
        value_objects::PropertyType,
    };

    fn build() -> BuildInfo {
        BuildInfo::new(2024, "0.1.0")
    }

    fn answers() -> RawAnswers {
        RawAnswers::with_defaults("my-widget", &RememberedDefaults::default())
            .variant(BaseVariant::LitElement)
            .description("A widget")
            .property(RawProperty::new("title", PropertyType::String))
            .hax(true)
    }

    #[test]
    fn compiles_lit_element_with_hax() {
        let spec = ElementSpecification::compile(&answers(), &build()).unwrap();

        assert_eq!(spec.class_name(), "MyWidget");
        assert_eq!(spec.camel_name(), "myWidget");
        assert_eq!(spec.bindings(), "<div>${this.title}</div>\n");

        let hax = spec.hax().unwrap();
        assert!(hax.quick().is_empty());
        assert_eq!(hax.configure().len(), 1);
        let title = &hax.configure()[0];
        assert_eq!(title.property, "title");
        assert_eq!(title.input_method, InputMethod::Textfield);
        assert!(!title.required);
        assert_eq!(spec.includes(), HAX_WIRING_IMPORT);
    }

    #[test]
    fn hax_is_absent_when_not_requested() {
        let spec = ElementSpecification::compile(&answers().hax(false), &build()).unwrap();
        assert!(spec.hax().is_none());
        assert!(spec.hax_json().is_none());
        assert_eq!(spec.includes(), "");
    }

    #[test]
    fn hax_needs_properties_enabled() {
        let mut answers = answers();
        answers.uses_custom_properties = false;
        let spec = ElementSpecification::compile(&answers, &build()).unwrap();

        assert!(spec.schema().is_empty());
        assert!(spec.hax().is_none());
        assert_eq!(spec.bindings(), "");
        assert_eq!(spec.story_declarations(), "");
    }

    #[test]
    fn invalid_name_aborts_compile() {
        let mut answers = answers();
        answers.element_name = "widget".into();
        assert_eq!(
            ElementSpecification::compile(&answers, &build()),
            Err(DomainError::InvalidIdentifier {
                raw: "widget".into()
            })
        );
    }

    #[test]
    fn duplicate_property_aborts_compile() {
        let answers = answers().property(RawProperty::new("title", PropertyType::Boolean));
        assert!(matches!(
            ElementSpecification::compile(&answers, &build()),
            Err(DomainError::DuplicatePropertyName { .. })
        ));
    }

    #[test]
    fn pascal_case_name_is_rejected() {
        let mut answers = answers();
        answers.element_name = "MyWidget".into();
        assert_eq!(
            ElementSpecification::compile(&answers, &build()).unwrap_err(),
            DomainError::InvalidIdentifier {
                raw: "MyWidget".into()
            }
        );
    }

    #[test]
    fn render_context_carries_template_variables() {
        let answers = answers().sass(Some(SassLibrary::rh_sass()));
        let spec = ElementSpecification::compile(&answers, &build()).unwrap();
        let ctx = spec.render_context().unwrap();

        assert_eq!(ctx["year"], 2024);
        assert_eq!(ctx["generatorVersion"], "0.1.0");
        assert_eq!(ctx["elementName"], "my-widget");
        assert_eq!(ctx["elementClassName"], "MyWidget");
        assert_eq!(ctx["readmeName"], "Widget");
        assert_eq!(ctx["customElementClass"], "LitElement");
        assert_eq!(ctx["license"], "Apache-2.0");
        assert_eq!(ctx["useHAX"], true);
        assert_eq!(ctx["propsBindingFactory"], "<div>${this.title}</div>\n");
        assert_eq!(ctx["templateReturnFunctionPart"], "render() {\n    return html");
        assert_eq!(ctx["storyHTMLProps"], "title=\"${title}\"");
        assert_eq!(ctx["litLibraryPkg"], "@polymer/lit-element");
        assert_eq!(ctx["polymerLibraryPkg"], false);
        assert_eq!(ctx["sassLibraryPkg"], "@rhelements/rh-sass");
        assert_eq!(ctx["propsList"]["title"]["observer"], "_titleChanged");
        assert_eq!(ctx["propsListString"], spec.properties_json().unwrap());
        assert_eq!(ctx["haxList"]["gizmo"]["title"], "My widget");
    }

    #[test]
    fn render_context_without_hax_has_empty_objects() {
        let spec = ElementSpecification::compile(&answers().hax(false), &build()).unwrap();
        let ctx = spec.render_context().unwrap();
        assert_eq!(ctx["haxList"], serde_json::json!({}));
        assert_eq!(ctx["haxListString"], "{}");
        assert_eq!(ctx["includesString"], "");
    }

    #[test]
    fn compile_is_deterministic() {
        let a = ElementSpecification::compile(&answers(), &build()).unwrap();
        let b = ElementSpecification::compile(&answers(), &build()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.render_context().unwrap(), b.render_context().unwrap());
    }
}
