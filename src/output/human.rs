//! Human-readable output formatter.
//!
//! Formats validation results for terminal display with optional color
//! support.

use console::style;

use super::ResultFormatter;
use crate::rule::{RuleResult, Severity};
use std::io::Write;

/// Formats validation results for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let plain = severity.to_string();
        if !self.use_color {
            return plain;
        }
        match severity {
            Severity::Must => style(plain).red().bold().to_string(),
            Severity::Should => style(plain).yellow().to_string(),
            Severity::May => style(plain).cyan().to_string(),
            Severity::Hint => style(plain).dim().to_string(),
        }
    }
}

impl ResultFormatter for HumanFormatter {
    fn format<W: Write>(&self, results: &[RuleResult], writer: &mut W) -> std::io::Result<()> {
        for result in results {
            // Header line: must[101]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(result.severity),
                result.rule.identity.id,
                result.description
            )?;

            // Location line
            if !result.pointer.is_root() {
                writeln!(writer, "  --> {}", result.pointer)?;
            }

            writeln!(writer, "   = rule: {}", result.rule.title)?;
            writeln!(writer)?;
        }

        // Summary
        let must_count = results
            .iter()
            .filter(|r| r.severity == Severity::Must)
            .count();
        let should_count = results
            .iter()
            .filter(|r| r.severity == Severity::Should)
            .count();

        if !results.is_empty() {
            writeln!(
                writer,
                "Found {} violation(s), {} must-fix and {} should-fix",
                results.len(),
                must_count,
                should_count
            )?;
        }

        Ok(())
    }
}
