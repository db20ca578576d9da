//! Implementation of the `elemental compile` command.
//!
//! Responsibility: wire the answer file and filesystem adapters into the
//! core scaffold service, then display or write what it derived. No
//! derivation logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use elemental_adapters::{AnswerFormat, FileAnswerSource, LocalFilesystem};
use elemental_core::{
    application::ScaffoldService,
    domain::{ElementSpecification, RenderMode},
};

use crate::{
    cli::{AnswersFormat, CompileArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `elemental compile` command.
///
/// 1. Turn the config into remembered defaults
/// 2. Load and compile the answers
/// 3. `--dry-run`: show the render plan and stop
/// 4. `--out`: write the derived data files
/// 5. Print the specification, only once writing succeeded
#[instrument(skip_all, fields(answers = %args.answers.display()))]
pub fn execute(args: CompileArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let defaults = config.to_remembered_defaults()?;

    if let Some(out) = args.out.as_deref().filter(|o| o.exists() && !o.is_dir()) {
        return Err(CliError::InvalidInput {
            message: format!("--out {} is not a directory", out.display()),
            source: None,
        });
    }

    let mut source = FileAnswerSource::new(&args.answers);
    if let Some(format) = args.answers_format {
        source = source.with_format(match format {
            AnswersFormat::Json => AnswerFormat::Json,
            AnswersFormat::Toml => AnswerFormat::Toml,
        });
    }

    let service = ScaffoldService::new(Box::new(source), Box::new(LocalFilesystem::new()));
    let spec = service.compile(&defaults)?;
    debug!(element = spec.element_name(), "Answers compiled");

    if args.dry_run {
        return show_plan(&spec, args.out.as_deref(), &output);
    }

    // nothing reaches stdout until the write has succeeded
    let report = match &args.out {
        Some(out_dir) => {
            let root = out_dir.join(spec.render_plan().root());
            if args.force && root.exists() {
                output.warning(&format!("Overwriting derived files in {}", root.display()))?;
            }
            let report = service.emit(&spec, out_dir, args.force)?;
            info!(files = report.written.len(), root = %report.root.display(), "Element data written");
            Some(report)
        }
        None => None,
    };

    if output.is_json() {
        let context = spec.render_context().map_err(|source| CliError::Serialization {
            what: "render context",
            source,
        })?;
        let pretty = serde_json::to_string_pretty(&context).map_err(|source| {
            CliError::Serialization {
                what: "render context",
                source,
            }
        })?;
        return output
            .data(&pretty)
            .with_cli_context(|| "writing render context");
    }

    show_summary(&spec, &output)?;

    if let Some(report) = report {
        output.print("")?;
        output.success(&format!(
            "Wrote {} file(s) under {}",
            report.written.len(),
            report.root.display()
        ))?;
        for path in &report.written {
            output.print(&format!("  {}", path.display()))?;
        }
    }

    Ok(())
}

// ── Human output ──────────────────────────────────────────────────────────────

fn show_summary(spec: &ElementSpecification, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Element <{}>", spec.element_name()))?;
    output.field("Class", spec.class_name())?;
    output.field("Camel name", spec.camel_name())?;
    output.field("Title", spec.human_name())?;
    output.field("Variant", spec.variant().as_str())?;
    output.field("License", spec.license().as_str())?;
    if !spec.author().is_empty() {
        output.field("Author", spec.author())?;
    }
    output.field("Copyright", spec.copyright_owner())?;
    if let Some(pkg) = spec.library_flags().variant_package() {
        output.field("Library", pkg)?;
    }
    if let Some(pkg) = spec.library_flags().sass_library_pkg() {
        output.field("Sass library", pkg)?;
    }

    let names: Vec<&str> = spec.schema().names().collect();
    output.field(
        "Properties",
        &if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        },
    )?;

    match spec.hax() {
        Some(hax) => output.field(
            "HAX",
            &format!(
                "{} quick, {} configure",
                hax.quick().len(),
                hax.configure().len()
            ),
        )?,
        None => output.field("HAX", "off")?,
    }

    if !spec.bindings().is_empty() {
        output.print("")?;
        output.print("Bindings:")?;
        for line in spec.bindings().lines() {
            output.print(&format!("  {line}"))?;
        }
    }

    Ok(())
}

fn show_plan(
    spec: &ElementSpecification,
    out_dir: Option<&Path>,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = spec.render_plan();
    let artifacts = ScaffoldService::artifacts(spec)?;

    if output.is_json() {
        let payload = serde_json::json!({
            "plan": plan,
            "artifacts": artifacts.iter().map(|a| a.path.to_string()).collect::<Vec<_>>(),
        });
        let pretty = serde_json::to_string_pretty(&payload).map_err(|source| {
            CliError::Serialization {
                what: "render plan",
                source,
            }
        })?;
        return output.data(&pretty).with_cli_context(|| "writing render plan");
    }

    output.info(&format!(
        "Dry run: render plan for <{}> ({} files)",
        spec.element_name(),
        plan.len()
    ))?;
    for file in plan.files() {
        let mode = match file.mode {
            RenderMode::Rendered => "render",
            RenderMode::Copied => "copy  ",
        };
        output.print(&format!(
            "  {mode} {} -> {}/{}",
            file.template,
            plan.root(),
            file.destination
        ))?;
    }

    if let Some(out_dir) = out_dir {
        output.print("")?;
        output.info(&format!("Would write under {}:", out_dir.display()))?;
        for artifact in &artifacts {
            output.print(&format!("  {}", out_dir.join(&artifact.path).display()))?;
        }
    }

    Ok(())
}
