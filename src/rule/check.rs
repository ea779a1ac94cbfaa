//! Checkable operations.
//!
//! Rules declare their checkable operations as an explicit table of
//! [`CheckDescriptor`]s, built once at rule construction. The engine iterates
//! this table; there is no runtime introspection of rule types.
//!
//! Every check returns through the [`CheckOutcome`] sum type, so statically
//! registered rules cannot produce an unsupported result shape. For rule
//! modules supplied dynamically, [`CheckOutcome::from_value`] adapts an
//! arbitrary return value and reports unrecognized types for the invoker to
//! reject.

use std::any::Any;

use serde_json::Value;

use super::severity::Severity;
use super::violation::Violation;
use crate::document::{ApiDocument, DocumentKind};

/// The inputs available to checks during one validation run.
///
/// The parsed document is always present; the raw JSON tree and the raw text
/// are offered separately so a check can declare exactly what it consumes.
pub struct CheckContext<'a> {
    /// The parsed document under validation.
    pub document: &'a ApiDocument,
    tree: Option<&'a Value>,
    text: Option<&'a str>,
}

impl<'a> CheckContext<'a> {
    /// Context offering the parsed document, its raw tree, and its raw text.
    pub fn full(document: &'a ApiDocument) -> Self {
        Self {
            document,
            tree: Some(&document.tree),
            text: Some(&document.raw),
        }
    }

    /// Context offering only the parsed document.
    pub fn document_only(document: &'a ApiDocument) -> Self {
        Self {
            document,
            tree: None,
            text: None,
        }
    }

    /// The raw JSON tree, when offered.
    pub fn tree(&self) -> Option<&Value> {
        self.tree
    }

    /// The raw document text, when offered.
    pub fn text(&self) -> Option<&str> {
        self.text
    }
}

/// The input combination a check accepts.
///
/// A check runs only when the current context offers every requested input
/// and lists the document's kind; otherwise it is skipped silently.
#[derive(Debug, Clone)]
pub struct CheckInputs {
    kinds: Vec<DocumentKind>,
    needs_tree: bool,
    needs_text: bool,
}

impl CheckInputs {
    /// A check over the parsed document for the given kinds.
    pub fn document(kinds: &[DocumentKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            needs_tree: false,
            needs_text: false,
        }
    }

    /// Additionally require the raw JSON tree.
    pub fn with_tree(mut self) -> Self {
        self.needs_tree = true;
        self
    }

    /// Additionally require the raw document text.
    pub fn with_text(mut self) -> Self {
        self.needs_text = true;
        self
    }

    /// Whether this check applies to documents of `kind`.
    pub fn accepts_kind(&self, kind: DocumentKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether the context offers everything this check declared.
    pub fn matches(&self, ctx: &CheckContext<'_>) -> bool {
        self.accepts_kind(ctx.document.kind)
            && (!self.needs_tree || ctx.tree().is_some())
            && (!self.needs_text || ctx.text().is_some())
    }
}

/// Result of one check invocation.
#[derive(Debug)]
pub enum CheckOutcome {
    /// No violations found.
    Empty,
    /// Exactly one violation.
    Single(Violation),
    /// Zero or more violations.
    Many(Vec<Violation>),
    /// A dynamically supplied check returned an unrecognized type; carries
    /// the concrete type name for the contract error.
    Unsupported(String),
}

impl CheckOutcome {
    /// Adapt an arbitrary return value from a dynamically supplied check.
    ///
    /// Recognizes `Vec<Violation>`, `Option<Violation>`, `Violation`, and
    /// `()`; anything else becomes [`CheckOutcome::Unsupported`] carrying
    /// the value's type name.
    pub fn from_value<T: Any>(value: T) -> Self {
        let any: Box<dyn Any> = Box::new(value);
        let any = match any.downcast::<Vec<Violation>>() {
            Ok(list) => return CheckOutcome::Many(*list),
            Err(other) => other,
        };
        let any = match any.downcast::<Option<Violation>>() {
            Ok(single) => {
                return match *single {
                    Some(violation) => CheckOutcome::Single(violation),
                    None => CheckOutcome::Empty,
                }
            }
            Err(other) => other,
        };
        let any = match any.downcast::<Violation>() {
            Ok(violation) => return CheckOutcome::Single(*violation),
            Err(other) => other,
        };
        match any.downcast::<()>() {
            Ok(_) => CheckOutcome::Empty,
            Err(_) => CheckOutcome::Unsupported(std::any::type_name::<T>().to_string()),
        }
    }
}

impl From<Vec<Violation>> for CheckOutcome {
    fn from(violations: Vec<Violation>) -> Self {
        CheckOutcome::Many(violations)
    }
}

impl From<Option<Violation>> for CheckOutcome {
    fn from(violation: Option<Violation>) -> Self {
        match violation {
            Some(violation) => CheckOutcome::Single(violation),
            None => CheckOutcome::Empty,
        }
    }
}

impl From<Violation> for CheckOutcome {
    fn from(violation: Violation) -> Self {
        CheckOutcome::Single(violation)
    }
}

/// The invocable part of a check.
pub type CheckFn = Box<dyn Fn(&CheckContext<'_>) -> CheckOutcome + Send + Sync>;

/// One checkable operation declared by a rule.
pub struct CheckDescriptor {
    /// Operation name, used in contract errors and trace output.
    pub name: &'static str,
    /// Declared severity; may differ from the rule's top-level severity.
    pub severity: Severity,
    /// The input combination this check accepts.
    pub inputs: CheckInputs,
    run: CheckFn,
}

impl CheckDescriptor {
    /// Declare a check.
    pub fn new(
        name: &'static str,
        severity: Severity,
        inputs: CheckInputs,
        run: impl Fn(&CheckContext<'_>) -> CheckOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            severity,
            inputs,
            run: Box::new(run),
        }
    }

    /// Invoke the check against the given context.
    pub fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for CheckDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn swagger_doc() -> ApiDocument {
        ApiDocument::new(DocumentKind::Swagger2, json!({"swagger": "2.0"}), "{}")
    }

    #[test]
    fn from_value_recognizes_violation_list() {
        let outcome = CheckOutcome::from_value(vec![Violation::at_root("a")]);
        assert!(matches!(outcome, CheckOutcome::Many(ref v) if v.len() == 1));
    }

    #[test]
    fn from_value_recognizes_optional_violation() {
        let outcome = CheckOutcome::from_value(Some(Violation::at_root("a")));
        assert!(matches!(outcome, CheckOutcome::Single(_)));

        let outcome = CheckOutcome::from_value(None::<Violation>);
        assert!(matches!(outcome, CheckOutcome::Empty));
    }

    #[test]
    fn from_value_recognizes_bare_violation_and_unit() {
        let outcome = CheckOutcome::from_value(Violation::at_root("a"));
        assert!(matches!(outcome, CheckOutcome::Single(_)));

        let outcome = CheckOutcome::from_value(());
        assert!(matches!(outcome, CheckOutcome::Empty));
    }

    #[test]
    fn from_value_reports_unsupported_type_by_name() {
        let outcome = CheckOutcome::from_value("Hello World!".to_string());
        match outcome {
            CheckOutcome::Unsupported(type_name) => assert!(type_name.contains("String")),
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn inputs_match_on_kind() {
        let doc = swagger_doc();
        let ctx = CheckContext::full(&doc);

        let inputs = CheckInputs::document(&[DocumentKind::Swagger2]);
        assert!(inputs.matches(&ctx));

        let inputs = CheckInputs::document(&[DocumentKind::OpenApi3]);
        assert!(!inputs.matches(&ctx));
    }

    #[test]
    fn inputs_requiring_absent_text_do_not_match() {
        let doc = swagger_doc();
        let ctx = CheckContext::document_only(&doc);

        let inputs = CheckInputs::document(&[DocumentKind::Swagger2]).with_text();
        assert!(!inputs.matches(&ctx));

        let inputs = CheckInputs::document(&[DocumentKind::Swagger2]).with_tree();
        assert!(!inputs.matches(&ctx));
    }

    #[test]
    fn descriptor_runs_its_function() {
        let descriptor = CheckDescriptor::new(
            "always-one",
            Severity::Should,
            CheckInputs::document(&[DocumentKind::Swagger2]),
            |_ctx| Violation::at_root("found").into(),
        );

        let doc = swagger_doc();
        let outcome = descriptor.run(&CheckContext::full(&doc));
        assert!(matches!(outcome, CheckOutcome::Single(_)));
    }
}
