//! Validation orchestration.
//!
//! [`RulesValidator`] is the externally-facing entry point: it parses raw
//! content, selects applicable rules, applies the exclusion policy and the
//! per-location ignore hook, invokes each rule, and returns a complete,
//! severity-sorted list of [`RuleResult`]s. Validation is all-or-nothing: a
//! parse failure or a rule contract violation aborts the call with a single
//! structured error and no partial results.

use std::cmp::Reverse;
use std::sync::Arc;

use serde::Serialize;

use super::check::CheckContext;
use super::invoker::{RuleInvoker, TaggedViolation};
use super::manager::RulesManager;
use super::policy::RulesPolicy;
use super::rule::RuleMetadata;
use super::severity::Severity;
use crate::document::{ApiDocument, ContentParseResult, ContentParser, DocumentPointer};
use crate::error::{OaslintError, Result};

/// A violation enriched with its producing rule's metadata; the unit
/// returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct RuleResult {
    /// Metadata of the rule that produced this result.
    pub rule: RuleMetadata,
    /// The violation message.
    pub description: String,
    /// Where in the document the violation was found.
    pub pointer: DocumentPointer,
    /// The producing check's declared severity.
    pub severity: Severity,
}

impl RuleResult {
    fn new(metadata: &RuleMetadata, tagged: TaggedViolation) -> Self {
        Self {
            rule: metadata.clone(),
            description: tagged.violation.message,
            pointer: tagged.violation.pointer,
            severity: tagged.severity,
        }
    }
}

/// Caller-injectable suppression hook, independent of the policy.
///
/// Consulted once per candidate violation; a `true` answer drops only that
/// violation, not the whole rule.
pub trait ViolationIgnorer: Send + Sync {
    /// Whether the violation at `pointer` produced by `rule_id` should be
    /// suppressed for this document.
    fn should_ignore(&self, document: &ApiDocument, pointer: &DocumentPointer, rule_id: &str)
        -> bool;
}

/// Ignorer that suppresses nothing.
#[derive(Debug, Default)]
pub struct NoopIgnorer;

impl ViolationIgnorer for NoopIgnorer {
    fn should_ignore(&self, _: &ApiDocument, _: &DocumentPointer, _: &str) -> bool {
        false
    }
}

/// The validation pipeline entry point.
pub struct RulesValidator {
    manager: Arc<RulesManager>,
    parser: Box<dyn ContentParser>,
    ignorer: Box<dyn ViolationIgnorer>,
    invoker: RuleInvoker,
}

impl RulesValidator {
    /// Create a validator over a registry and a content parser.
    pub fn new(manager: Arc<RulesManager>, parser: impl ContentParser + 'static) -> Self {
        Self {
            manager,
            parser: Box::new(parser),
            ignorer: Box::new(NoopIgnorer),
            invoker: RuleInvoker::new(),
        }
    }

    /// Replace the per-location ignore hook.
    pub fn with_ignorer(mut self, ignorer: impl ViolationIgnorer + 'static) -> Self {
        self.ignorer = Box::new(ignorer);
        self
    }

    /// Validate raw content under a policy.
    ///
    /// Rules run strictly in registration order; the returned list is
    /// stable-sorted by severity, most severe first, so within equal
    /// severity the production order is preserved. This ordering is a hard
    /// contract.
    pub fn validate(
        &self,
        content: &str,
        policy: &RulesPolicy,
        authorization: Option<&str>,
    ) -> Result<Vec<RuleResult>> {
        let document = match self.parser.parse(content, authorization) {
            ContentParseResult::ParsedSuccessfully(document) => document,
            ContentParseResult::ParseFailed(message) => {
                return Err(OaslintError::Parse { message })
            }
        };
        tracing::debug!(kind = %document.kind, "document parsed");

        let ctx = CheckContext::full(&document);
        let mut results = Vec::new();
        for details in self.manager.rules_applicable_to(document.kind) {
            let rule_id = &details.metadata.identity.id;
            if policy.excludes(rule_id) {
                tracing::debug!(rule = %rule_id, "rule excluded by policy");
                continue;
            }
            for tagged in self.invoker.invoke(details, &ctx)? {
                if self
                    .ignorer
                    .should_ignore(&document, &tagged.violation.pointer, rule_id)
                {
                    continue;
                }
                results.push(RuleResult::new(&details.metadata, tagged));
            }
        }

        // Stable sort; production order breaks ties within a severity.
        results.sort_by_key(|result| Reverse(result.severity));
        Ok(results)
    }
}
