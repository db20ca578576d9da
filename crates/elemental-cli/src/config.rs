//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the
//! [`RememberedDefaults`] snapshot derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ELEMENTAL_DEFAULTS__AUTHOR=...`
//! 3. Config file: `--config FILE`, else `config.toml` in the platform
//!    config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use clap::ValueEnum as _;

use elemental_core::domain::{BaseVariant, License, RememberedDefaults};

use crate::cli::global::OutputFormat;
use crate::error::{CliError, CliResult};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ELEMENTAL";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers remembered from earlier sessions.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Defaults offered for answers a file leaves out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: String,
    pub copyright_owner: String,
    pub license: String,
    pub variant: String,
    pub use_sass: bool,
    pub add_props: bool,
    pub use_hax: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        let remembered = RememberedDefaults::default();
        Self {
            author: remembered.author,
            copyright_owner: remembered.copyright_owner,
            license: remembered.license.to_string(),
            variant: remembered.base_variant.to_string(),
            use_sass: remembered.use_sass,
            add_props: remembered.uses_custom_properties,
            use_hax: remembered.uses_hax,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: built-in defaults, then the config file, then the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), required, "Loading configuration");

        let defaults = config::Config::try_from(&Self::default())
            .context("failed to seed built-in configuration defaults")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.elemental.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "elemental", "elemental")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".elemental.toml"))
    }

    /// The snapshot of remembered answers handed to the answer source.
    pub fn to_remembered_defaults(&self) -> CliResult<RememberedDefaults> {
        let d = &self.defaults;
        let license: License = d.license.parse().map_err(|e| CliError::ConfigError {
            message: format!("defaults.license: {e}"),
            source: None,
        })?;
        let base_variant: BaseVariant = d.variant.parse().map_err(|e| CliError::ConfigError {
            message: format!("defaults.variant: {e}"),
            source: None,
        })?;

        Ok(RememberedDefaults {
            author: d.author.clone(),
            copyright_owner: d.copyright_owner.clone(),
            license,
            base_variant,
            use_sass: d.use_sass,
            uses_custom_properties: d.add_props,
            uses_hax: d.use_hax,
        })
    }

    /// The configured `output.format`.
    pub fn output_format(&self) -> CliResult<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true).map_err(|e| CliError::ConfigError {
            message: format!("output.format: {e}"),
            source: None,
        })
    }

    /// Look up a dotted key such as `defaults.author`.
    pub fn get(&self, key: &str) -> CliResult<serde_json::Value> {
        let tree = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        tree.pointer(&format!("/{}", key.replace('.', "/")))
            .filter(|v| !v.is_object())
            .cloned()
            .ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_mirror_remembered_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.copyright_owner, "Red Hat, Inc.");
        assert_eq!(cfg.defaults.license, "Apache-2.0");
        assert_eq!(cfg.defaults.variant, "HTMLElement");
        assert!(cfg.defaults.add_props);
        assert_eq!(
            cfg.to_remembered_defaults().unwrap(),
            RememberedDefaults::default()
        );
    }

    #[test]
    fn output_format_is_parsed_case_insensitively() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.output_format().unwrap(), OutputFormat::Auto);
        cfg.output.format = "JSON".into();
        assert_eq!(cfg.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn unknown_output_format_is_a_config_error() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "yaml".into();
        let err = cfg.output_format().unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("output.format"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_builtins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nauthor = \"Ada\"\nvariant = \"LitElement\"\nuse_hax = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author, "Ada");
        // untouched keys keep their built-in values
        assert_eq!(cfg.defaults.copyright_owner, "Red Hat, Inc.");

        let remembered = cfg.to_remembered_defaults().unwrap();
        assert_eq!(remembered.base_variant, BaseVariant::LitElement);
        assert!(remembered.uses_hax);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn missing_default_file_is_fine() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("config.toml"), false).unwrap();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn bad_license_is_a_config_error() {
        let mut cfg = AppConfig::default();
        cfg.defaults.license = "GPL".into();
        assert!(matches!(
            cfg.to_remembered_defaults(),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.license").unwrap(), "Apache-2.0");
        assert_eq!(cfg.get("output.no_color").unwrap(), false);
    }

    #[test]
    fn get_unknown_or_section_key_is_error() {
        let cfg = AppConfig::default();
        assert!(cfg.get("does.not.exist").is_err());
        assert!(cfg.get("defaults").is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
