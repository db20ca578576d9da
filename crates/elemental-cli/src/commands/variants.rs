//! Implementation of the `elemental variants` command.

use serde::Serialize;

use elemental_core::domain::BaseVariant;

use crate::{
    cli::{ListFormat, VariantsArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct VariantRow {
    name: &'static str,
    library: Option<&'static str>,
    description: &'static str,
}

impl From<BaseVariant> for VariantRow {
    fn from(variant: BaseVariant) -> Self {
        Self {
            name: variant.as_str(),
            library: variant.library().map(|l| l.package()),
            description: variant.description(),
        }
    }
}

pub fn execute(args: VariantsArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<VariantRow> = BaseVariant::ALL.into_iter().map(VariantRow::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available Base Variants:")?;
            for row in &rows {
                output.print(&format!("  {:<16} {}", row.name, row.description))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                output.data(row.name)?;
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|source| {
                CliError::Serialization {
                    what: "variant list",
                    source,
                }
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}
