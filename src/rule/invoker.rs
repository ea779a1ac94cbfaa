//! Rule invocation and contract enforcement.
//!
//! The [`RuleInvoker`] runs every matching check of one rule against a
//! validation context and normalizes the outcomes into a flat list of
//! severity-tagged violations. An unsupported return shape from a
//! dynamically supplied check is a configuration defect and fails the whole
//! validation call, synchronously, with an error naming the offending type.

use super::check::{CheckContext, CheckOutcome};
use super::rule::RuleDetails;
use super::severity::Severity;
use super::violation::Violation;
use crate::error::{OaslintError, Result};

/// A violation paired with the severity its producing check declared.
///
/// The check severity may differ from the rule's top-level severity; results
/// carry the check's.
#[derive(Debug, Clone)]
pub struct TaggedViolation {
    /// The producing check's declared severity.
    pub severity: Severity,
    /// The violation itself.
    pub violation: Violation,
}

/// Invokes one rule's checks against a validation context.
#[derive(Debug, Default)]
pub struct RuleInvoker;

impl RuleInvoker {
    /// Create an invoker.
    pub fn new() -> Self {
        Self
    }

    /// Run all matching checks of `details` and collect tagged violations.
    ///
    /// Checks whose declared inputs do not match the context are skipped
    /// silently. Each matching check runs exactly once. Emission order is
    /// the rule's check declaration order, then the order within each
    /// returned list.
    pub fn invoke(
        &self,
        details: &RuleDetails,
        ctx: &CheckContext<'_>,
    ) -> Result<Vec<TaggedViolation>> {
        let mut violations = Vec::new();
        for check in details.instance.checks() {
            if !check.inputs.matches(ctx) {
                tracing::trace!(
                    rule = %details.metadata.identity.id,
                    check = check.name,
                    "skipping check with unmatched inputs"
                );
                continue;
            }
            match check.run(ctx) {
                CheckOutcome::Empty => {}
                CheckOutcome::Single(violation) => violations.push(TaggedViolation {
                    severity: check.severity,
                    violation,
                }),
                CheckOutcome::Many(list) => {
                    violations.extend(list.into_iter().map(|violation| TaggedViolation {
                        severity: check.severity,
                        violation,
                    }));
                }
                CheckOutcome::Unsupported(type_name) => {
                    return Err(OaslintError::RuleContract {
                        rule: details.metadata.identity.id.clone(),
                        check: check.name.to_string(),
                        type_name,
                    });
                }
            }
        }
        Ok(violations)
    }
}
