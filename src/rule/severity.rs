//! Violation severity levels.

use serde::{Deserialize, Serialize};

/// Severity level for guideline violations.
///
/// The ordering is total and ascending, so `Must` compares greatest; result
/// sorting uses it to put the most severe findings first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational hint, no guideline impact.
    Hint,
    /// The guideline permits this; flagged for awareness.
    May,
    /// The guideline recommends otherwise.
    Should,
    /// The guideline requires otherwise.
    Must,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::May => write!(f, "may"),
            Severity::Should => write!(f, "should"),
            Severity::Must => write!(f, "must"),
        }
    }
}
