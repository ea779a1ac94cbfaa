//! Swagger 2.0 schema compliance.
//!
//! Checks that a Swagger 2.0 document conforms to the Swagger meta-schema,
//! emitting one violation per schema-validation message. The wrapped
//! validator is built once at rule construction; see
//! [`crate::schema::loader`] for the override/fallback policy.

use crate::document::DocumentKind;
use crate::rule::check::{CheckDescriptor, CheckInputs, CheckOutcome};
use crate::rule::rule::Rule;
use crate::rule::severity::Severity;
use crate::rule::violation::Violation;
use crate::schema::{load_validator, JsonSchemaValidator, SchemaRuleConfig};
use std::sync::Arc;

/// Rule 101: the document must be valid against the Swagger 2.0 schema.
pub struct SchemaComplianceRule {
    checks: Vec<CheckDescriptor>,
}

impl SchemaComplianceRule {
    /// Rule id within the default rule set.
    pub const ID: &'static str = "101";
    /// Rule title.
    pub const TITLE: &'static str = "OpenAPI 2.0 schema";

    /// Construct the rule, loading its schema validator once.
    pub fn new(config: &SchemaRuleConfig) -> Self {
        let validator = Arc::new(load_validator(config));
        Self {
            checks: vec![CheckDescriptor::new(
                "validate",
                Severity::Must,
                CheckInputs::document(&[DocumentKind::Swagger2]).with_tree(),
                move |ctx| Self::validate(&validator, ctx),
            )],
        }
    }

    fn validate(
        validator: &JsonSchemaValidator,
        ctx: &crate::rule::check::CheckContext<'_>,
    ) -> CheckOutcome {
        let Some(tree) = ctx.tree() else {
            return CheckOutcome::Empty;
        };
        let violations: Vec<Violation> = validator
            .validate(tree)
            .messages
            .into_iter()
            .map(|message| Violation::new(message.message, message.pointer))
            .collect();
        violations.into()
    }
}

impl Rule for SchemaComplianceRule {
    fn checks(&self) -> &[CheckDescriptor] {
        &self.checks
    }
}
