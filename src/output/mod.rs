//! Result output formatters.
//!
//! This module provides formatters for presenting validation results in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::rule::RuleResult;
use std::io::Write;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for formatting validation results.
pub trait ResultFormatter {
    /// Format results to the given writer.
    fn format<W: Write>(&self, results: &[RuleResult], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
