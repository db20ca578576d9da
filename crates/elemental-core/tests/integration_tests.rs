//! Integration tests for elemental-core, driving the public API end to end.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use elemental_core::{
    application::{ApplicationError, SPEC_FILE_NAME},
    domain::{InputMethod, PropertySchema},
    prelude::*,
};

struct FixedAnswers(RawAnswers);

impl AnswerSource for FixedAnswers {
    fn load(&self, _defaults: &RememberedDefaults) -> ElementalResult<RawAnswers> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed".into()
    }
}

#[derive(Clone, Default)]
struct RecordingFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl RecordingFs {
    fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, _path: &Path) -> ElementalResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ElementalResult<()> {
        self.files
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap()
            .keys()
            .any(|p| p.starts_with(path))
    }

    fn remove_file(&self, path: &Path) -> ElementalResult<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ElementalResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn widget_answers() -> RawAnswers {
    RawAnswers::with_defaults("my-widget", &RememberedDefaults::default())
        .variant(BaseVariant::LitElement)
        .description("A widget")
        .property(RawProperty::new("title", PropertyType::String))
        .property(RawProperty::new("src", PropertyType::String))
        .hax(true)
}

#[test]
fn compile_and_emit_workflow() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(
        Box::new(FixedAnswers(widget_answers())),
        Box::new(fs.clone()),
    );

    let spec = service
        .compile_with(&RememberedDefaults::default(), &BuildInfo::new(2024, "1.2.3"))
        .unwrap();
    service.emit(&spec, Path::new("out"), false).unwrap();

    let properties = fs.read("out/my-widget/src/my-widget-properties.json").unwrap();
    let schema = PropertySchema::from_json(&properties).unwrap();
    assert_eq!(schema.names().collect::<Vec<_>>(), ["title", "src"]);

    let hax: serde_json::Value =
        serde_json::from_str(&fs.read("out/my-widget/src/my-widget-hax.json").unwrap()).unwrap();
    assert_eq!(hax["settings"]["quick"][0]["property"], "src");
    assert_eq!(hax["settings"]["configure"].as_array().unwrap().len(), 2);

    let context: serde_json::Value = serde_json::from_str(
        &fs.read(&format!("out/my-widget/{SPEC_FILE_NAME}")).unwrap(),
    )
    .unwrap();
    assert_eq!(context["year"], 2024);
    assert_eq!(context["generatorVersion"], "1.2.3");
    assert_eq!(context["elementClassName"], "MyWidget");
}

#[test]
fn second_emit_needs_force() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(
        Box::new(FixedAnswers(widget_answers())),
        Box::new(fs.clone()),
    );
    let spec = service.compile(&RememberedDefaults::default()).unwrap();

    service.emit(&spec, Path::new("out"), false).unwrap();
    let err = service.emit(&spec, Path::new("out"), false).unwrap_err();
    assert!(matches!(
        err,
        ElementalError::Application(ApplicationError::ElementExists { .. })
    ));

    service.emit(&spec, Path::new("out"), true).unwrap();
}

#[test]
fn compile_stamps_current_version() {
    let service = ScaffoldService::new(
        Box::new(FixedAnswers(widget_answers())),
        Box::new(RecordingFs::default()),
    );
    let spec = service.compile(&RememberedDefaults::default()).unwrap();
    assert_eq!(spec.generator_version(), elemental_core::VERSION);
    assert!(spec.year() >= 2024);
}

#[test]
fn end_to_end_lit_element_with_hax() {
    let answers = RawAnswers::with_defaults("my-widget", &RememberedDefaults::default())
        .variant(BaseVariant::LitElement)
        .property(RawProperty::new("title", PropertyType::String))
        .hax(true);
    let spec = ElementSpecification::compile(&answers, &BuildInfo::new(2024, "0.1.0")).unwrap();

    assert_eq!(spec.class_name(), "MyWidget");
    assert_eq!(spec.camel_name(), "myWidget");
    assert_eq!(spec.bindings(), "<div>${this.title}</div>\n");

    let hax = spec.hax().unwrap();
    assert!(hax.quick().is_empty());
    assert_eq!(hax.configure().len(), 1);
    assert_eq!(hax.configure()[0].property, "title");
    assert_eq!(hax.configure()[0].input_method, InputMethod::Textfield);
    assert!(!hax.configure()[0].required);
}

#[test]
fn invalid_answers_write_nothing() {
    let mut answers = widget_answers();
    answers.element_name = "widget".into();
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(FixedAnswers(answers)), Box::new(fs.clone()));

    let err = service.compile(&RememberedDefaults::default()).unwrap_err();
    assert!(matches!(err, ElementalError::Domain(_)));
    assert!(fs.files.lock().unwrap().is_empty());
}
