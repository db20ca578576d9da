//! `elemental config`: inspect the remembered defaults.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            // strings print bare so the value can be used in scripts
            let rendered = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            output.data(&rendered)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                let json =
                    serde_json::to_string_pretty(&config).map_err(|source| CliError::Serialization {
                        what: "configuration",
                        source,
                    })?;
                output.data(&json)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.data(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}
