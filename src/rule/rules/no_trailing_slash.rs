//! Trailing-slash detection.
//!
//! Flags every path under `/paths` that ends in a slash; clients treat
//! `/pets` and `/pets/` as different resources.

use serde_json::Value;

use crate::document::{DocumentKind, DocumentPointer};
use crate::rule::check::{CheckContext, CheckDescriptor, CheckInputs, CheckOutcome};
use crate::rule::rule::Rule;
use crate::rule::severity::Severity;
use crate::rule::violation::Violation;

/// Rule 136: paths must not end with a trailing slash.
pub struct NoTrailingSlashRule {
    checks: Vec<CheckDescriptor>,
}

impl NoTrailingSlashRule {
    /// Rule id within the default rule set.
    pub const ID: &'static str = "136";
    /// Rule title.
    pub const TITLE: &'static str = "Avoid trailing slashes";

    /// Construct the rule.
    pub fn new() -> Self {
        Self {
            checks: vec![CheckDescriptor::new(
                "validate",
                Severity::Must,
                CheckInputs::document(&[DocumentKind::Swagger2, DocumentKind::OpenApi3])
                    .with_tree(),
                Self::validate,
            )],
        }
    }

    fn validate(ctx: &CheckContext<'_>) -> CheckOutcome {
        let Some(paths) = ctx
            .tree()
            .and_then(|tree| tree.get("paths"))
            .and_then(Value::as_object)
        else {
            return CheckOutcome::Empty;
        };

        let base = DocumentPointer::root().child("paths");
        let violations: Vec<Violation> = paths
            .keys()
            .filter(|path| path.len() > 1 && path.ends_with('/'))
            .map(|path| {
                Violation::new(
                    format!("path '{path}' ends with a trailing slash"),
                    base.child(path),
                )
            })
            .collect();
        violations.into()
    }
}

impl Default for NoTrailingSlashRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NoTrailingSlashRule {
    fn checks(&self) -> &[CheckDescriptor] {
        &self.checks
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::document::ApiDocument;

    fn run(tree: serde_json::Value) -> Vec<Violation> {
        let rule = NoTrailingSlashRule::new();
        let doc = ApiDocument::new(DocumentKind::Swagger2, tree, "");
        let ctx = CheckContext::full(&doc);
        match rule.checks()[0].run(&ctx) {
            CheckOutcome::Empty => Vec::new(),
            CheckOutcome::Many(violations) => violations,
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn detects_trailing_slash() {
        let violations = run(json!({"paths": {"/pets/": {}}}));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("/pets/"));
        assert_eq!(violations[0].pointer.as_str(), "/paths/~1pets~1");
    }

    #[test]
    fn passes_without_trailing_slashes() {
        let violations = run(json!({"paths": {"/pets": {}, "/pets/{id}": {}}}));
        assert!(violations.is_empty());
    }

    #[test]
    fn root_path_is_allowed() {
        let violations = run(json!({"paths": {"/": {}}}));
        assert!(violations.is_empty());
    }

    #[test]
    fn detects_multiple_offenders() {
        let violations = run(json!({"paths": {"/a/": {}, "/b/": {}, "/c": {}}}));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn missing_paths_block_yields_nothing() {
        let violations = run(json!({"swagger": "2.0"}));
        assert!(violations.is_empty());
    }
}
