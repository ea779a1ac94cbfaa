//! Rule registry.
//!
//! The [`RulesManager`] holds the immutable collection of registered rules
//! and answers discovery queries. It is built once at startup and never
//! mutated afterwards, so it can be shared freely across concurrent
//! validation calls.

use super::rule::{RuleBinding, RuleDetails, RuleIdentity, RuleMetadata, RuleSet};
use crate::document::DocumentKind;

/// Immutable registry of all registered rules, in registration order.
pub struct RulesManager {
    rules: Vec<RuleDetails>,
}

impl RulesManager {
    /// Build the registry from rule-set records and rule bindings.
    ///
    /// Registration is best-effort over a heterogeneous set of candidates: a
    /// binding naming a rule set that is not among `rule_sets` is dropped,
    /// not an error.
    pub fn new(rule_sets: &[RuleSet], bindings: Vec<RuleBinding>) -> Self {
        let rules = bindings
            .into_iter()
            .filter_map(|binding| {
                if !rule_sets.iter().any(|rs| rs.id == binding.rule_set) {
                    tracing::debug!(
                        rule = %binding.id,
                        rule_set = %binding.rule_set,
                        "dropping rule bound to unknown rule set"
                    );
                    return None;
                }
                Some(RuleDetails {
                    metadata: RuleMetadata {
                        identity: RuleIdentity {
                            rule_set: binding.rule_set,
                            id: binding.id,
                        },
                        severity: binding.severity,
                        title: binding.title,
                    },
                    instance: binding.instance,
                })
            })
            .collect();
        Self { rules }
    }

    /// All registered rules, in registration order.
    pub fn all_rules(&self) -> &[RuleDetails] {
        &self.rules
    }

    /// Rules with at least one check accepting documents of `kind`.
    ///
    /// Preserves registration order.
    pub fn rules_applicable_to(&self, kind: DocumentKind) -> impl Iterator<Item = &RuleDetails> {
        self.rules.iter().filter(move |details| {
            details
                .instance
                .checks()
                .iter()
                .any(|check| check.inputs.accepts_kind(kind))
        })
    }

    /// Look up a rule by id.
    pub fn get(&self, rule_id: &str) -> Option<&RuleDetails> {
        self.rules
            .iter()
            .find(|details| details.metadata.identity.id == rule_id)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rule::check::{CheckDescriptor, CheckInputs, CheckOutcome};
    use crate::rule::rule::Rule;
    use crate::rule::severity::Severity;

    struct KindRule {
        checks: Vec<CheckDescriptor>,
    }

    impl KindRule {
        fn for_kinds(kinds: &[DocumentKind]) -> Self {
            Self {
                checks: vec![CheckDescriptor::new(
                    "noop",
                    Severity::Should,
                    CheckInputs::document(kinds),
                    |_ctx| CheckOutcome::Empty,
                )],
            }
        }
    }

    impl Rule for KindRule {
        fn checks(&self) -> &[CheckDescriptor] {
            &self.checks
        }
    }

    fn binding(rule_set: &str, id: &str, kinds: &[DocumentKind]) -> RuleBinding {
        RuleBinding::new(
            rule_set,
            id,
            Severity::Should,
            format!("Rule {id}"),
            Arc::new(KindRule::for_kinds(kinds)),
        )
    }

    fn rule_sets() -> Vec<RuleSet> {
        vec![RuleSet::new("test", "Test Guidelines")]
    }

    #[test]
    fn empty_registry() {
        let manager = RulesManager::new(&rule_sets(), vec![]);
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn preserves_registration_order() {
        let manager = RulesManager::new(
            &rule_sets(),
            vec![
                binding("test", "first", &[DocumentKind::Swagger2]),
                binding("test", "second", &[DocumentKind::Swagger2]),
            ],
        );
        let ids: Vec<_> = manager
            .all_rules()
            .iter()
            .map(|d| d.metadata.identity.id.as_str())
            .collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn drops_bindings_with_unknown_rule_set() {
        let manager = RulesManager::new(
            &rule_sets(),
            vec![
                binding("test", "kept", &[DocumentKind::Swagger2]),
                binding("nonexistent", "dropped", &[DocumentKind::Swagger2]),
            ],
        );
        assert_eq!(manager.len(), 1);
        assert!(manager.get("kept").is_some());
        assert!(manager.get("dropped").is_none());
    }

    #[test]
    fn applicability_follows_check_inputs() {
        let manager = RulesManager::new(
            &rule_sets(),
            vec![
                binding("test", "swagger-only", &[DocumentKind::Swagger2]),
                binding("test", "openapi-only", &[DocumentKind::OpenApi3]),
                binding(
                    "test",
                    "both",
                    &[DocumentKind::Swagger2, DocumentKind::OpenApi3],
                ),
            ],
        );

        let ids: Vec<_> = manager
            .rules_applicable_to(DocumentKind::Swagger2)
            .map(|d| d.metadata.identity.id.as_str())
            .collect();
        assert_eq!(ids, ["swagger-only", "both"]);
    }

    #[test]
    fn lookup_by_id() {
        let manager = RulesManager::new(
            &rule_sets(),
            vec![binding("test", "101", &[DocumentKind::Swagger2])],
        );
        assert!(manager.get("101").is_some());
        assert!(manager.get("999").is_none());
    }
}
