//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// oaslint - Guideline compliance checker for API descriptions.
#[derive(Debug, Parser)]
#[command(name = "oaslint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check an API description against the registered rules
    Lint(LintArgs),

    /// List the registered rules
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// API description file (JSON or YAML)
    pub file: PathBuf,

    /// Output format: human or json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Rule ids to skip (repeatable)
    #[arg(long = "ignore", value_name = "RULE_ID")]
    pub ignored: Vec<String>,

    /// Override URL for the compliance schema
    #[arg(long, env = "OASLINT_SCHEMA_URL")]
    pub schema_url: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lint_parses_file_and_flags() {
        let cli = Cli::parse_from([
            "oaslint", "lint", "api.yaml", "--format", "json", "--ignore", "101", "--ignore",
            "136",
        ]);
        match cli.command {
            Commands::Lint(args) => {
                assert_eq!(args.file, PathBuf::from("api.yaml"));
                assert_eq!(args.format, "json");
                assert_eq!(args.ignored, ["101", "136"]);
            }
            other => panic!("expected lint, got {other:?}"),
        }
    }

    #[test]
    fn rules_subcommand_parses() {
        let cli = Cli::parse_from(["oaslint", "rules"]);
        assert!(matches!(cli.command, Commands::Rules));
    }
}
