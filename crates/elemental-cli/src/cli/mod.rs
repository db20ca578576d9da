//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "elemental",
    bin_name = "elemental",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Web component scaffolding compiler",
    long_about = "Elemental turns the answers of a scaffolding session into \
                  everything the templates of a new web component need: \
                  names, property schema, bindings, HAX metadata and story knobs.",
    after_help = "EXAMPLES:\n\
        \x20 elemental compile answers.toml\n\
        \x20 elemental compile answers.json --out ./elements\n\
        \x20 elemental variants --format list\n\
        \x20 elemental completions bash > /usr/share/bash-completion/completions/elemental",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile an answers file into an element specification.
    #[command(
        visible_alias = "c",
        about = "Compile answers into an element specification",
        after_help = "EXAMPLES:\n\
            \x20 elemental compile answers.toml\n\
            \x20 elemental compile answers.json --output-format json\n\
            \x20 elemental compile answers.toml --out ./elements --force\n\
            \x20 cat answers.json | elemental compile -"
    )]
    Compile(CompileArgs),

    /// List the base variants an element can build on.
    #[command(
        visible_alias = "ls",
        about = "List available base variants",
        after_help = "EXAMPLES:\n\
            \x20 elemental variants\n\
            \x20 elemental variants --format json"
    )]
    Variants(VariantsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 elemental completions bash > ~/.local/share/bash-completion/completions/elemental\n\
            \x20 elemental completions zsh  > ~/.zfunc/_elemental\n\
            \x20 elemental completions fish > ~/.config/fish/completions/elemental.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the remembered defaults.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 elemental config get defaults.author\n\
            \x20 elemental config list\n\
            \x20 elemental config path"
    )]
    Config(ConfigCommands),
}

// ── compile ───────────────────────────────────────────────────────────────────

/// Arguments for `elemental compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Answers file (JSON or TOML). `-` reads JSON from stdin.
    #[arg(value_name = "ANSWERS", help = "Answers file, or - for stdin")]
    pub answers: PathBuf,

    /// Force the answers file format instead of guessing from the extension.
    #[arg(
        long = "answers-format",
        value_name = "FORMAT",
        value_enum,
        help = "Answers file format (default: from extension)"
    )]
    pub answers_format: Option<AnswersFormat>,

    /// Write the derived data files under this directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Write derived data files under DIR"
    )]
    pub out: Option<PathBuf>,

    /// Overwrite an existing element directory.
    #[arg(long = "force", requires = "out", help = "Overwrite existing element directory")]
    pub force: bool,

    /// Print the render plan without writing anything.
    #[arg(long = "dry-run", help = "Show the render plan without writing files")]
    pub dry_run: bool,
}

/// Answers file format override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnswersFormat {
    Json,
    Toml,
}

// ── variants ──────────────────────────────────────────────────────────────────

/// Arguments for `elemental variants`.
#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `variants` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `elemental completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `elemental config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_compile_command() {
        let cli = Cli::parse_from(["elemental", "compile", "answers.toml"]);
        match cli.command {
            Commands::Compile(args) => {
                assert_eq!(args.answers, PathBuf::from("answers.toml"));
                assert!(args.out.is_none());
                assert!(!args.force);
                assert!(!args.dry_run);
            }
            other => panic!("expected Compile, got {other:?}"),
        }
    }

    #[test]
    fn compile_accepts_stdin_and_format_override() {
        let cli = Cli::parse_from(["elemental", "compile", "-", "--answers-format", "toml"]);
        if let Commands::Compile(args) = cli.command {
            assert_eq!(args.answers, PathBuf::from("-"));
            assert_eq!(args.answers_format, Some(AnswersFormat::Toml));
        } else {
            panic!("expected Compile command");
        }
    }

    #[test]
    fn force_requires_out() {
        let result = Cli::try_parse_from(["elemental", "compile", "a.json", "--force"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["elemental", "compile", "a.json", "--out", "x", "--force"]);
        assert!(result.is_ok());
    }

    #[test]
    fn variants_alias_and_format() {
        let cli = Cli::parse_from(["elemental", "ls", "--format", "json"]);
        if let Commands::Variants(args) = cli.command {
            assert_eq!(args.format, ListFormat::Json);
        } else {
            panic!("expected Variants command");
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["elemental", "variants", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["elemental", "--quiet", "--verbose", "variants"]);
        assert!(result.is_err());
    }
}
