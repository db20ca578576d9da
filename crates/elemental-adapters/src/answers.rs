//! File-based answer source.
//!
//! Reads the answers a prompt session would have produced from a JSON or
//! TOML file. Every field except `name` may be omitted; gaps are filled from
//! the remembered defaults handed in by the caller.
//!
//! # `answers.toml` format
//!
//! ```toml
//! name               = "my-widget"
//! description        = "A widget"
//! customElementClass = "LitElement"   # HTMLElement | RHElement | Slim | SkateJS | LitElement | PolymerElement
//! license            = "MIT"          # Apache-2.0 | MIT | BSD-3-Clause
//! useHAX             = true
//!
//! [[propsList]]
//! name               = "title"
//! type               = "String"       # String | Boolean | Number | Object | Array | Date
//! value              = ""
//! reflectToAttribute = false
//! observer           = true
//!
//! [sassLibrary]
//! pkg  = "@rhelements/rh-sass"
//! path = "rh-sass/rh-sass"
//! ```
//!
//! The JSON form uses the same keys. A path of `-` reads JSON from stdin.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use elemental_core::{
    application::{ApplicationError, ports::AnswerSource},
    domain::{BaseVariant, License, RawAnswers, RawProperty, RememberedDefaults, SassLibrary},
    error::ElementalResult,
};

// ── Format ────────────────────────────────────────────────────────────────────

/// Serialization format of an answers file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Toml,
}

impl AnswerFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Error)]
enum AnswerFileError {
    #[error("failed to read: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required field 'name'")]
    MissingName,
}

// ── Answer file ───────────────────────────────────────────────────────────────

/// Partially filled answers, exactly as found in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AnswerFile {
    name: Option<String>,
    description: Option<String>,
    author: Option<String>,
    copyright_owner: Option<String>,
    license: Option<License>,
    #[serde(alias = "variant")]
    custom_element_class: Option<BaseVariant>,
    add_props: Option<bool>,
    #[serde(rename = "useHAX")]
    use_hax: Option<bool>,
    props_list: Option<Vec<RawProperty>>,
    use_sass: Option<bool>,
    sass_library: Option<SassLibrary>,
}

impl AnswerFile {
    fn parse(content: &str, format: AnswerFormat) -> Result<Self, AnswerFileError> {
        Ok(match format {
            AnswerFormat::Json => serde_json::from_str(content)?,
            AnswerFormat::Toml => toml::from_str(content)?,
        })
    }

    fn resolve(self, defaults: &RememberedDefaults) -> Result<RawAnswers, AnswerFileError> {
        let name = self.name.ok_or(AnswerFileError::MissingName)?;
        let mut answers = RawAnswers::with_defaults(name, defaults);

        if let Some(description) = self.description {
            answers.description = description;
        }
        if let Some(author) = self.author {
            answers.author = author;
        }
        if let Some(owner) = self.copyright_owner {
            answers.copyright_owner = owner;
        }
        if let Some(license) = self.license {
            answers.license = license;
        }
        if let Some(variant) = self.custom_element_class {
            answers.base_variant = variant;
        }
        if let Some(properties) = self.props_list {
            answers.properties = properties;
        }
        // an explicit propsList implies addProps unless the file says otherwise
        answers.uses_custom_properties = self
            .add_props
            .unwrap_or(defaults.uses_custom_properties || !answers.properties.is_empty());
        if let Some(use_hax) = self.use_hax {
            answers.uses_hax = use_hax;
        }
        if let Some(use_sass) = self.use_sass {
            answers.use_sass = use_sass;
        }
        answers.sass_library = self.sass_library;

        Ok(answers)
    }
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Answers read from a JSON or TOML file.
#[derive(Debug, Clone)]
pub struct FileAnswerSource {
    path: PathBuf,
    format: AnswerFormat,
}

impl FileAnswerSource {
    /// Source for `path`, with the format inferred from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = AnswerFormat::from_path(&path);
        Self { path, format }
    }

    /// Override the inferred format.
    pub fn with_format(mut self, format: AnswerFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read(&self) -> Result<String, AnswerFileError> {
        if self.is_stdin() {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        } else {
            Ok(fs::read_to_string(&self.path)?)
        }
    }

    fn load_inner(&self, defaults: &RememberedDefaults) -> Result<RawAnswers, AnswerFileError> {
        let content = self.read()?;
        debug!(bytes = content.len(), format = ?self.format, "Read answers file");
        AnswerFile::parse(&content, self.format)?.resolve(defaults)
    }
}

impl AnswerSource for FileAnswerSource {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self, defaults: &RememberedDefaults) -> ElementalResult<RawAnswers> {
        self.load_inner(defaults).map_err(|e| {
            let source_name = self.describe();
            let reason = e.to_string();
            match e {
                AnswerFileError::Io(_) => ApplicationError::AnswerSource {
                    source_name,
                    reason,
                },
                _ => ApplicationError::MalformedAnswers {
                    source_name,
                    reason,
                },
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "<stdin>".into()
        } else {
            self.path.display().to_string()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_core::domain::PropertyType;
    use elemental_core::error::{ElementalError, ErrorCategory};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(AnswerFormat::from_path(Path::new("a.toml")), AnswerFormat::Toml);
        assert_eq!(AnswerFormat::from_path(Path::new("a.TOML")), AnswerFormat::Toml);
        assert_eq!(AnswerFormat::from_path(Path::new("a.json")), AnswerFormat::Json);
        assert_eq!(AnswerFormat::from_path(Path::new("answers")), AnswerFormat::Json);
    }

    #[test]
    fn loads_toml_answers() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "answers.toml",
            r#"
name = "my-widget"
customElementClass = "PolymerElement"
useHAX = true

[[propsList]]
name = "src"
type = "String"

[[propsList]]
name = "open"
type = "Boolean"
value = "false"
observer = false
"#,
        );

        let answers = FileAnswerSource::new(path)
            .load(&RememberedDefaults::default())
            .unwrap();
        assert_eq!(answers.element_name, "my-widget");
        assert_eq!(answers.base_variant, BaseVariant::PolymerElement);
        assert!(answers.wants_hax());
        assert_eq!(answers.properties.len(), 2);
        assert_eq!(answers.properties[1].kind, PropertyType::Boolean);
        assert!(!answers.properties[1].observer);
    }

    #[test]
    fn loads_json_answers() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "answers.json",
            r#"{"name": "x-list", "license": "MIT", "useSass": true,
                "sassLibrary": {"pkg": "@rhelements/rh-sass", "path": "rh-sass/rh-sass"}}"#,
        );

        let answers = FileAnswerSource::new(path)
            .load(&RememberedDefaults::default())
            .unwrap();
        assert_eq!(answers.license, License::Mit);
        assert!(answers.use_sass);
        assert_eq!(answers.sass_library, Some(SassLibrary::rh_sass()));
    }

    #[test]
    fn missing_fields_come_from_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "answers.json", r#"{"name": "my-widget"}"#);
        let defaults = RememberedDefaults {
            author: "Ada".into(),
            copyright_owner: "ACME".into(),
            license: License::Bsd3Clause,
            base_variant: BaseVariant::SlimBinding,
            ..RememberedDefaults::default()
        };

        let answers = FileAnswerSource::new(path).load(&defaults).unwrap();
        assert_eq!(answers.author, "Ada");
        assert_eq!(answers.copyright_owner, "ACME");
        assert_eq!(answers.license, License::Bsd3Clause);
        assert_eq!(answers.base_variant, BaseVariant::SlimBinding);
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "answers.toml",
            "name = \"my-widget\"\nauthor = \"Grace\"\naddProps = false\n",
        );
        let defaults = RememberedDefaults {
            author: "Ada".into(),
            ..RememberedDefaults::default()
        };

        let answers = FileAnswerSource::new(path).load(&defaults).unwrap();
        assert_eq!(answers.author, "Grace");
        assert!(!answers.uses_custom_properties);
    }

    #[test]
    fn props_list_turns_properties_on() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "answers.json",
            r#"{"name": "my-widget", "propsList": [{"name": "title"}]}"#,
        );
        let defaults = RememberedDefaults {
            uses_custom_properties: false,
            ..RememberedDefaults::default()
        };

        let answers = FileAnswerSource::new(path).load(&defaults).unwrap();
        assert!(answers.uses_custom_properties);
    }

    #[test]
    fn missing_name_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "answers.json", r#"{"author": "Ada"}"#);

        let err = FileAnswerSource::new(path)
            .load(&RememberedDefaults::default())
            .unwrap_err();
        assert!(err.to_string().contains("name"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "answers.json", r#"{"name": "my-widget", "colour": "red"}"#);
        let err = FileAnswerSource::new(path)
            .load(&RememberedDefaults::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ElementalError::Application(ApplicationError::MalformedAnswers { .. })
        ));
    }

    #[test]
    fn syntax_errors_are_malformed_not_missing() {
        let temp = TempDir::new().unwrap();
        let json = write(&temp, "answers.json", r#"{"name": "my-widget""#);
        let toml = write(&temp, "answers.toml", "name = \n");

        for path in [json, toml] {
            let err = FileAnswerSource::new(path)
                .load(&RememberedDefaults::default())
                .unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Validation);
        }
    }

    #[test]
    fn missing_file_is_an_answer_source_error() {
        let source = FileAnswerSource::new("/absolutely/does/not/exist.json");
        let err = source.load(&RememberedDefaults::default()).unwrap_err();
        assert!(matches!(
            err,
            ElementalError::Application(ApplicationError::AnswerSource { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn explicit_format_wins() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "answers.txt", "name = \"my-widget\"\n");
        let answers = FileAnswerSource::new(path)
            .with_format(AnswerFormat::Toml)
            .load(&RememberedDefaults::default())
            .unwrap();
        assert_eq!(answers.element_name, "my-widget");
    }
}
