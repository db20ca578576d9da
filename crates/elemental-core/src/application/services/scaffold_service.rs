//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the element workflow:
//! 1. Load answers through the `AnswerSource` port
//! 2. Compile them into an `ElementSpecification`
//! 3. Write the derived data artifacts through the `Filesystem` port

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AnswerSource, Filesystem},
    },
    domain::{BuildInfo, ElementSpecification, RelativePath, RememberedDefaults},
    error::{ElementalError, ElementalResult},
};

/// File name of the full render context written next to the element sources.
pub const SPEC_FILE_NAME: &str = "element.spec.json";

/// One derived data file, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative to the output directory, element directory included.
    pub path: RelativePath,
    pub content: String,
}

/// What `emit` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    answers: Box<dyn AnswerSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(answers: Box<dyn AnswerSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            answers,
            filesystem,
        }
    }

    /// Load answers and compile them, stamped with the current year and
    /// this crate's version.
    pub fn compile(&self, defaults: &RememberedDefaults) -> ElementalResult<ElementSpecification> {
        self.compile_with(defaults, &BuildInfo::current())
    }

    #[instrument(skip_all, fields(source = %self.answers.describe(), year = build.year))]
    pub fn compile_with(
        &self,
        defaults: &RememberedDefaults,
        build: &BuildInfo,
    ) -> ElementalResult<ElementSpecification> {
        let answers = self.answers.load(defaults)?;
        debug!(
            name = %answers.element_name,
            variant = %answers.base_variant,
            properties = answers.properties.len(),
            "Answers loaded"
        );

        let spec = ElementSpecification::compile(&answers, build)?;
        debug!(
            element = spec.element_name(),
            class = spec.class_name(),
            "Identity normalized"
        );
        debug!(properties = spec.schema().len(), "Property schema built");
        debug!(
            library = spec.library_flags().variant_package().unwrap_or("none"),
            "Variant bindings generated"
        );
        debug!(
            quick = spec.hax().map_or(0, |h| h.quick().len()),
            configure = spec.hax().map_or(0, |h| h.configure().len()),
            "HAX metadata synthesized"
        );

        info!(
            element = spec.element_name(),
            variant = %spec.variant(),
            hax = spec.hax().is_some(),
            "Specification compiled"
        );
        Ok(spec)
    }

    /// The data files derived from `spec`: the property schema, the HAX
    /// descriptor when present, and the full render context.
    pub fn artifacts(spec: &ElementSpecification) -> ElementalResult<Vec<Artifact>> {
        let plan = spec.render_plan();
        let locate = |template: &str| -> ElementalResult<RelativePath> {
            let destination = plan
                .destination_of(template)
                .ok_or_else(|| ElementalError::Internal {
                    message: format!("render plan has no entry for {template}"),
                })?;
            Ok(plan.root().join(destination)?)
        };

        let mut artifacts = vec![Artifact {
            path: locate("src/properties.json")?,
            content: spec
                .properties_json()
                .map_err(|e| serialization("property schema", &e))?,
        }];

        if let Some(hax) = spec.hax_json() {
            artifacts.push(Artifact {
                path: locate("src/hax.json")?,
                content: hax.map_err(|e| serialization("HAX descriptor", &e))?,
            });
        }

        let context = spec
            .render_context()
            .and_then(|ctx| serde_json::to_string_pretty(&ctx))
            .map_err(|e| serialization("render context", &e))?;
        artifacts.push(Artifact {
            path: plan.root().join(SPEC_FILE_NAME)?,
            content: context,
        });

        Ok(artifacts)
    }

    /// Write the derived artifacts under `out_dir`.
    ///
    /// Refuses an existing element directory unless `force` is set. On a
    /// failed write, a freshly created element directory is removed; with
    /// `force`, only the files written by this call are removed.
    #[instrument(
        skip_all,
        fields(element = spec.element_name(), out_dir = %out_dir.display(), force = force)
    )]
    pub fn emit(
        &self,
        spec: &ElementSpecification,
        out_dir: &Path,
        force: bool,
    ) -> ElementalResult<EmitReport> {
        let artifacts = Self::artifacts(spec)?;
        let root = out_dir.join(spec.render_plan().root());

        let existed = self.filesystem.exists(&root);
        if existed && !force {
            return Err(ApplicationError::ElementExists { path: root }.into());
        }
        if existed {
            warn!(path = %root.display(), "Overwriting existing element directory");
        }

        let mut written = Vec::with_capacity(artifacts.len());
        match self.write_all(out_dir, &artifacts, &mut written) {
            Ok(()) => {
                info!(files = written.len(), "Artifacts written");
                Ok(EmitReport { root, written })
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&root, existed, &written);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(
        &self,
        out_dir: &Path,
        artifacts: &[Artifact],
        written: &mut Vec<PathBuf>,
    ) -> ElementalResult<()> {
        for artifact in artifacts {
            let path = out_dir.join(&artifact.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &artifact.content)?;
            debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote artifact");
            written.push(path);
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path, existed: bool, written: &[PathBuf]) {
        let result = if existed {
            written
                .iter()
                .try_for_each(|path| self.filesystem.remove_file(path))
        } else {
            self.filesystem.remove_dir_all(root)
        };

        match result {
            Ok(()) => info!("Rollback successful"),
            Err(e) => warn!(error = %e, path = %root.display(), "Rollback failed"),
        }
    }
}

fn serialization(artifact: &'static str, err: &serde_json::Error) -> ElementalError {
    ApplicationError::Serialization {
        artifact,
        reason: err.to_string(),
    }
    .into()
}
