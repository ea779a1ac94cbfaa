//! Built-in rules and default registry construction.
//!
//! The standard registry is built explicitly from these pure functions,
//! called once during process initialization; there is no ambient container
//! populating the rule set.

pub mod no_trailing_slash;
pub mod schema_compliance;

use std::sync::Arc;

use super::rule::{RuleBinding, RuleSet};
use super::severity::Severity;
use crate::schema::SchemaRuleConfig;

pub use no_trailing_slash::NoTrailingSlashRule;
pub use schema_compliance::SchemaComplianceRule;

/// Id of the built-in rule set.
pub const DEFAULT_RULE_SET: &str = "oaslint";

/// The rule sets shipped with the binary.
pub fn default_rule_sets() -> Vec<RuleSet> {
    vec![RuleSet::new(DEFAULT_RULE_SET, "oaslint API guidelines")
        .with_url("https://github.com/oaslint/oaslint")]
}

/// The rule bindings shipped with the binary, in registration order.
pub fn default_rules(config: &SchemaRuleConfig) -> Vec<RuleBinding> {
    vec![
        RuleBinding::new(
            DEFAULT_RULE_SET,
            SchemaComplianceRule::ID,
            Severity::Must,
            SchemaComplianceRule::TITLE,
            Arc::new(SchemaComplianceRule::new(config)),
        ),
        RuleBinding::new(
            DEFAULT_RULE_SET,
            NoTrailingSlashRule::ID,
            Severity::Must,
            NoTrailingSlashRule::TITLE,
            Arc::new(NoTrailingSlashRule::new()),
        ),
    ]
}
