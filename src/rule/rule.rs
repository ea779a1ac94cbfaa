//! Rule contract and registration metadata.
//!
//! This module provides the capability interface all rules implement and the
//! immutable metadata records binding a rule to its identity:
//!
//! - [`Rule`] - the trait rule implementations expose their checks through
//! - [`RuleSet`] / [`RuleIdentity`] / [`RuleMetadata`] - identity records
//! - [`RuleBinding`] - registration input consumed by the manager
//! - [`RuleDetails`] - a registered rule held by the manager

use std::sync::Arc;

use serde::Serialize;

use super::check::CheckDescriptor;
use super::severity::Severity;

/// A unit of guideline enforcement.
///
/// A rule declares its checkable operations once, at construction; the
/// engine enumerates them at registration time and never introspects the
/// implementing type.
pub trait Rule: Send + Sync {
    /// The rule's checkable operations.
    fn checks(&self) -> &[CheckDescriptor];
}

/// A named collection of rules (e.g. one organization's guidelines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Stable rule-set identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Where the guidelines are published, if anywhere.
    pub url: Option<String>,
}

impl RuleSet {
    /// Create a rule set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
        }
    }

    /// Attach a published guidelines URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Unique identity of a rule within the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuleIdentity {
    /// The owning rule set's id.
    pub rule_set: String,
    /// The rule's own id, unique across the system.
    pub id: String,
}

/// Immutable metadata describing a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMetadata {
    /// The rule's identity.
    pub identity: RuleIdentity,
    /// The rule's top-level severity.
    pub severity: Severity,
    /// Human-readable title.
    pub title: String,
}

/// Registration input: one rule candidate supplied at startup.
pub struct RuleBinding {
    /// Id of the rule set this rule claims to belong to.
    pub rule_set: String,
    /// The rule's id.
    pub id: String,
    /// The rule's top-level severity.
    pub severity: Severity,
    /// Human-readable title.
    pub title: String,
    /// The rule implementation.
    pub instance: Arc<dyn Rule>,
}

impl RuleBinding {
    /// Create a binding.
    pub fn new(
        rule_set: impl Into<String>,
        id: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        instance: Arc<dyn Rule>,
    ) -> Self {
        Self {
            rule_set: rule_set.into(),
            id: id.into(),
            severity,
            title: title.into(),
            instance,
        }
    }
}

/// A registered rule: metadata plus the instantiated implementation.
///
/// Created once during registration and held immutably for the process
/// lifetime; safe to share across threads.
#[derive(Clone)]
pub struct RuleDetails {
    /// The rule's metadata.
    pub metadata: RuleMetadata,
    /// The rule implementation; opaque to the engine except for its checks.
    pub instance: Arc<dyn Rule>,
}

impl std::fmt::Debug for RuleDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDetails")
            .field("metadata", &self.metadata)
            .field("checks", &self.instance.checks().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoChecksRule;

    impl Rule for NoChecksRule {
        fn checks(&self) -> &[CheckDescriptor] {
            &[]
        }
    }

    #[test]
    fn rule_set_builder() {
        let rule_set = RuleSet::new("zalando", "Zalando RESTful API Guidelines")
            .with_url("https://opensource.zalando.com/restful-api-guidelines/");
        assert_eq!(rule_set.id, "zalando");
        assert!(rule_set.url.is_some());
    }

    #[test]
    fn identity_equality() {
        let a = RuleIdentity {
            rule_set: "zalando".into(),
            id: "101".into(),
        };
        let b = RuleIdentity {
            rule_set: "zalando".into(),
            id: "101".into(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn binding_carries_instance() {
        let binding = RuleBinding::new(
            "zalando",
            "101",
            Severity::Must,
            "OpenAPI 2.0 schema",
            Arc::new(NoChecksRule),
        );
        assert_eq!(binding.id, "101");
        assert!(binding.instance.checks().is_empty());
    }
}
