//! Per-call rule exclusion policy.

use std::collections::HashSet;

/// The set of rule ids suppressed for one validation call.
///
/// Supplied by the caller, immutable for the call, never persisted.
#[derive(Debug, Clone, Default)]
pub struct RulesPolicy {
    ignored_ids: HashSet<String>,
}

impl RulesPolicy {
    /// A policy excluding nothing.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// A policy excluding the given rule ids.
    pub fn ignoring<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `rule_id` is excluded under this policy.
    pub fn excludes(&self, rule_id: &str) -> bool {
        self.ignored_ids.contains(rule_id)
    }
}
