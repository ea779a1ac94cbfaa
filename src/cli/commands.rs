//! Command execution.
//!
//! Each subcommand builds what it needs from the default registry and
//! reports through stdout/stderr; exit codes mirror the severity of what
//! was found.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use clap::CommandFactory;

use super::args::{Cli, Commands, CompletionsArgs, LintArgs};
use crate::document::OpenApiParser;
use crate::error::Result;
use crate::output::{HumanFormatter, JsonFormatter, OutputFormat, ResultFormatter};
use crate::rule::rules::{default_rule_sets, default_rules};
use crate::rule::{RuleResult, RulesManager, RulesPolicy, RulesValidator, Severity};
use crate::schema::SchemaRuleConfig;

/// Exit status of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: u8,
}

impl CommandResult {
    /// Clean run.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Violations found or input rejected.
    pub fn failure(exit_code: u8) -> Self {
        Self { exit_code }
    }
}

/// Run the selected subcommand.
pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
    match &cli.command {
        Commands::Lint(args) => lint(args, !cli.no_color),
        Commands::Rules => rules(),
        Commands::Completions(args) => completions(args),
    }
}

fn parse_format(format: &str) -> OutputFormat {
    match format {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Human,
    }
}

fn lint(args: &LintArgs, use_color: bool) -> Result<CommandResult> {
    let content = fs::read_to_string(&args.file)?;

    let config = SchemaRuleConfig {
        schema_url: args.schema_url.clone(),
        ..Default::default()
    };
    let manager = Arc::new(RulesManager::new(
        &default_rule_sets(),
        default_rules(&config),
    ));
    let validator = RulesValidator::new(manager, OpenApiParser::new());
    let policy = RulesPolicy::ignoring(args.ignored.iter().cloned());

    let results = validator.validate(&content, &policy, None)?;
    write_results(&results, parse_format(&args.format), use_color)?;

    if results.iter().any(|r| r.severity == Severity::Must) {
        Ok(CommandResult::failure(1))
    } else {
        Ok(CommandResult::success())
    }
}

fn write_results(results: &[RuleResult], format: OutputFormat, use_color: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    match format {
        OutputFormat::Json => JsonFormatter::new().format(results, &mut writer)?,
        OutputFormat::Human => {
            if results.is_empty() {
                writeln!(writer, "No violations found.")?;
            } else {
                HumanFormatter::new(use_color).format(results, &mut writer)?;
            }
        }
    }
    Ok(())
}

fn rules() -> Result<CommandResult> {
    let manager = RulesManager::new(
        &default_rule_sets(),
        default_rules(&SchemaRuleConfig::default()),
    );

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    for details in manager.all_rules() {
        let metadata = &details.metadata;
        writeln!(
            writer,
            "{:<6} {:<8} {} ({})",
            metadata.identity.id, metadata.severity, metadata.title, metadata.identity.rule_set
        )?;
    }
    Ok(CommandResult::success())
}

fn completions(args: &CompletionsArgs) -> Result<CommandResult> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "oaslint", &mut std::io::stdout());
    Ok(CommandResult::success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert_eq!(CommandResult::failure(1).exit_code, 1);
    }

    #[test]
    fn unknown_format_defaults_to_human() {
        assert_eq!(parse_format("human"), OutputFormat::Human);
        assert_eq!(parse_format("json"), OutputFormat::Json);
        assert_eq!(parse_format("yaml"), OutputFormat::Human);
    }
}
