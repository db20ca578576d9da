use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    entities::{answers::RawAnswers, common::RelativePath, identity::ElementIdentity},
    error::DomainError,
};

/// Whether a planned file goes through the template engine or is copied
/// byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Rendered,
    Copied,
}

/// One (template, destination) pair for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub template: RelativePath,
    /// Relative to the element directory.
    pub destination: RelativePath,
    pub mode: RenderMode,
}

/// Every file a scaffold run produces for one element.
///
/// This is data only; rendering the templates is somebody else's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    root: RelativePath,
    files: Vec<PlannedFile>,
}

impl RenderPlan {
    pub fn for_element(identity: &ElementIdentity, answers: &RawAnswers) -> Result<Self, DomainError> {
        let name = identity.element_name();
        let mut plan = Self {
            root: RelativePath::try_new(name)?,
            files: Vec::with_capacity(16),
        };

        plan.add("package.json", "package.json", RenderMode::Rendered)?;
        plan.add("index.html", "index.html", RenderMode::Rendered)?;
        plan.add(
            &format!("licenses/{}.md", answers.license),
            "LICENSE.md",
            RenderMode::Rendered,
        )?;
        plan.add(
            &format!("src/{}.js", answers.base_variant.as_str()),
            &format!("src/{name}.js"),
            RenderMode::Rendered,
        )?;
        plan.add(
            "src/properties.json",
            &format!("src/{name}-properties.json"),
            RenderMode::Rendered,
        )?;
        plan.add("src/hax.json", &format!("src/{name}-hax.json"), RenderMode::Rendered)?;
        plan.add("README.md", "README.md", RenderMode::Rendered)?;
        plan.add("gulpfile.js", "gulpfile.js", RenderMode::Rendered)?;
        plan.add("rollup.config.js", "rollup.config.js", RenderMode::Rendered)?;
        plan.add("demo/index.html", "demo/index.html", RenderMode::Rendered)?;
        plan.add(
            "test/element_test.html",
            &format!("test/{name}_test.html"),
            RenderMode::Rendered,
        )?;
        plan.add("test/index.html", "test/index.html", RenderMode::Rendered)?;
        plan.add("element.story.js", &format!("{name}.story.js"), RenderMode::Rendered)?;
        plan.add("polymer.json", "polymer.json", RenderMode::Copied)?;

        // Sass sources are templated; plain CSS is copied as-is
        if answers.use_sass {
            plan.add("src/element.scss", &format!("src/{name}.scss"), RenderMode::Rendered)?;
        } else {
            plan.add("src/element.css", &format!("src/{name}.css"), RenderMode::Copied)?;
        }

        plan.add("src/element.html", &format!("src/{name}.html"), RenderMode::Rendered)?;

        plan.validate()?;
        Ok(plan)
    }

    fn add(&mut self, template: &str, destination: &str, mode: RenderMode) -> Result<(), DomainError> {
        self.files.push(PlannedFile {
            template: RelativePath::try_new(template)?,
            destination: RelativePath::try_new(destination)?,
            mode,
        });
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.destination) {
                return Err(DomainError::DuplicatePath {
                    path: file.destination.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The element directory every destination lives under.
    pub fn root(&self) -> &RelativePath {
        &self.root
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Where `template` lands, relative to the element directory.
    pub fn destination_of(&self, template: &str) -> Option<&RelativePath> {
        self.files
            .iter()
            .find(|f| f.template.as_path() == std::path::Path::new(template))
            .map(|f| &f.destination)
    }

    pub fn rendered(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.mode == RenderMode::Rendered)
    }

    pub fn copied(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.mode == RenderMode::Copied)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
