//! JSON output formatter.
//!
//! Formats validation results as machine-readable JSON for tooling
//! integration.

use serde::Serialize;

use super::ResultFormatter;
use crate::rule::{RuleResult, Severity};
use std::io::Write;

/// Formats validation results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    violations: Vec<JsonViolation<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    rule_set: &'a str,
    rule_id: &'a str,
    title: &'a str,
    severity: String,
    description: &'a str,
    pointer: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    must: usize,
    should: usize,
    may: usize,
    hint: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format<W: Write>(&self, results: &[RuleResult], writer: &mut W) -> std::io::Result<()> {
        let violations: Vec<_> = results
            .iter()
            .map(|r| JsonViolation {
                rule_set: &r.rule.identity.rule_set,
                rule_id: &r.rule.identity.id,
                title: &r.rule.title,
                severity: r.severity.to_string(),
                description: &r.description,
                pointer: r.pointer.as_str(),
            })
            .collect();

        let count = |severity| results.iter().filter(|r| r.severity == severity).count();
        let summary = JsonSummary {
            total: results.len(),
            must: count(Severity::Must),
            should: count(Severity::Should),
            may: count(Severity::May),
            hint: count(Severity::Hint),
        };

        let output = JsonOutput {
            violations,
            summary,
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
