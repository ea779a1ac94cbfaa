//! Structural JSON-Schema validation.
//!
//! [`JsonSchemaValidator`] checks a JSON tree against a draft-04 style
//! schema and reports every mismatch with a message and a document pointer.
//! It covers the keyword subset the bundled API schemas use: `type`, `enum`,
//! `required`, `properties`, `patternProperties`, `additionalProperties`,
//! `items`, array/string/number constraints, `allOf`/`anyOf`/`oneOf`/`not`,
//! and `$ref` (local pointers plus redirected absolute URLs).
//!
//! References to well-known external schema URLs are resolved through a
//! redirect table of bundled documents, so validation never touches the
//! network.

use std::collections::HashMap;

use serde_json::Value;

use crate::document::DocumentPointer;

/// One schema-validation finding.
#[derive(Debug, Clone)]
pub struct SchemaMessage {
    /// What failed.
    pub message: String,
    /// Where in the instance it failed.
    pub pointer: DocumentPointer,
}

/// The full outcome of validating one instance.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidation {
    /// All findings, in instance order. Empty means conformant.
    pub messages: Vec<SchemaMessage>,
}

/// Validates JSON instances against a fixed schema document.
pub struct JsonSchemaValidator {
    schema: Value,
    redirects: HashMap<String, Value>,
}

// Deeply recursive schemas (the draft-04 meta-schema references itself) are
// cut off rather than allowed to recurse unboundedly.
const MAX_DEPTH: usize = 64;

impl JsonSchemaValidator {
    /// Create a validator over a schema with no external references.
    pub fn new(schema: Value) -> Self {
        Self::with_redirects(schema, HashMap::new())
    }

    /// Create a validator that resolves absolute `$ref` URLs through a
    /// redirect table of bundled schema documents.
    pub fn with_redirects(schema: Value, redirects: HashMap<String, Value>) -> Self {
        Self { schema, redirects }
    }

    /// Validate an instance; an empty message list means conformant.
    pub fn validate(&self, instance: &Value) -> SchemaValidation {
        let mut walker = Walker {
            validator: self,
            messages: Vec::new(),
        };
        walker.check(&self.schema, &self.schema, instance, &DocumentPointer::root(), 0);
        SchemaValidation {
            messages: walker.messages,
        }
    }

    /// Resolve a `$ref` string to a (schema, resolution root) pair.
    fn resolve_ref<'a>(&'a self, reference: &str, root: &'a Value) -> Option<(&'a Value, &'a Value)> {
        let (base, fragment) = match reference.split_once('#') {
            Some((base, fragment)) => (base, fragment),
            None => (reference, ""),
        };
        let target_root = if base.is_empty() {
            root
        } else {
            match self.redirects.get(base.trim_end_matches('/')) {
                Some(document) => document,
                None => {
                    tracing::debug!(reference, "skipping unresolvable external $ref");
                    return None;
                }
            }
        };
        let schema = if fragment.is_empty() {
            target_root
        } else {
            target_root.pointer(fragment)?
        };
        Some((schema, target_root))
    }
}

struct Walker<'a> {
    validator: &'a JsonSchemaValidator,
    messages: Vec<SchemaMessage>,
}

impl<'a> Walker<'a> {
    fn report(&mut self, pointer: &DocumentPointer, message: String) {
        self.messages.push(SchemaMessage {
            message,
            pointer: pointer.clone(),
        });
    }

    /// Run a subschema in isolation and report whether it matched.
    fn matches(&self, schema: &'a Value, root: &'a Value, instance: &Value, depth: usize) -> bool {
        let mut scratch = Walker {
            validator: self.validator,
            messages: Vec::new(),
        };
        scratch.check(schema, root, instance, &DocumentPointer::root(), depth);
        scratch.messages.is_empty()
    }

    fn check(
        &mut self,
        schema: &'a Value,
        root: &'a Value,
        instance: &Value,
        pointer: &DocumentPointer,
        depth: usize,
    ) {
        if depth > MAX_DEPTH {
            return;
        }
        let Some(schema) = schema.as_object() else {
            return;
        };

        // In draft-04, $ref replaces all sibling keywords.
        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            if let Some((target, target_root)) = self.validator.resolve_ref(reference, root) {
                self.check(target, target_root, instance, pointer, depth + 1);
            }
            return;
        }

        if let Some(types) = schema.get("type") {
            self.check_type(types, instance, pointer);
        }

        if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
            if !allowed.contains(instance) {
                self.report(
                    pointer,
                    format!("value is not one of the allowed values: {allowed:?}"),
                );
            }
        }

        if let Some(subschemas) = schema.get("allOf").and_then(Value::as_array) {
            for subschema in subschemas {
                self.check(subschema, root, instance, pointer, depth + 1);
            }
        }

        if let Some(subschemas) = schema.get("anyOf").and_then(Value::as_array) {
            let matched = subschemas
                .iter()
                .any(|subschema| self.matches(subschema, root, instance, depth + 1));
            if !matched {
                self.report(pointer, "does not match any of the required schemas".into());
            }
        }

        if let Some(subschemas) = schema.get("oneOf").and_then(Value::as_array) {
            let matched = subschemas
                .iter()
                .filter(|subschema| self.matches(subschema, root, instance, depth + 1))
                .count();
            if matched != 1 {
                self.report(
                    pointer,
                    format!("matches {matched} of the schemas when exactly one is required"),
                );
            }
        }

        if let Some(subschema) = schema.get("not") {
            if self.matches(subschema, root, instance, depth + 1) {
                self.report(pointer, "must not match the forbidden schema".into());
            }
        }

        match instance {
            Value::Object(fields) => self.check_object(schema, root, fields, pointer, depth),
            Value::Array(items) => self.check_array(schema, root, items, pointer, depth),
            Value::String(text) => self.check_string(schema, text, pointer),
            Value::Number(_) => self.check_number(schema, instance, pointer),
            _ => {}
        }
    }

    fn check_type(&mut self, types: &Value, instance: &Value, pointer: &DocumentPointer) {
        let actual = type_name(instance);
        let accepts = |expected: &str| match expected {
            "number" => matches!(instance, Value::Number(_)),
            "integer" => instance
                .as_number()
                .is_some_and(|n| n.is_i64() || n.is_u64()),
            other => other == actual,
        };
        let ok = match types {
            Value::String(expected) => accepts(expected),
            Value::Array(options) => options
                .iter()
                .filter_map(Value::as_str)
                .any(accepts),
            _ => true,
        };
        if !ok {
            self.report(pointer, format!("expected type {types}, found {actual}"));
        }
    }

    fn check_object(
        &mut self,
        schema: &'a serde_json::Map<String, Value>,
        root: &'a Value,
        fields: &serde_json::Map<String, Value>,
        pointer: &DocumentPointer,
        depth: usize,
    ) {
        if let Some(required) = schema.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                if !fields.contains_key(name) {
                    self.report(pointer, format!("required property '{name}' is missing"));
                }
            }
        }

        let properties = schema.get("properties").and_then(Value::as_object);
        let pattern_properties = schema.get("patternProperties").and_then(Value::as_object);

        for (name, value) in fields {
            let child = pointer.child(name);
            let mut covered = false;

            if let Some(subschema) = properties.and_then(|p| p.get(name)) {
                covered = true;
                self.check(subschema, root, value, &child, depth + 1);
            }

            if let Some(patterns) = pattern_properties {
                for (pattern, subschema) in patterns {
                    let Ok(re) = regex::Regex::new(pattern) else {
                        continue;
                    };
                    if re.is_match(name) {
                        covered = true;
                        self.check(subschema, root, value, &child, depth + 1);
                    }
                }
            }

            if !covered {
                match schema.get("additionalProperties") {
                    Some(Value::Bool(false)) => {
                        self.report(pointer, format!("property '{name}' is not allowed"));
                    }
                    Some(subschema) if subschema.is_object() => {
                        self.check(subschema, root, value, &child, depth + 1);
                    }
                    _ => {}
                }
            }
        }
    }

    fn check_array(
        &mut self,
        schema: &'a serde_json::Map<String, Value>,
        root: &'a Value,
        items: &[Value],
        pointer: &DocumentPointer,
        depth: usize,
    ) {
        match schema.get("items") {
            Some(subschema) if subschema.is_object() => {
                for (index, item) in items.iter().enumerate() {
                    let child = pointer.child(&index.to_string());
                    self.check(subschema, root, item, &child, depth + 1);
                }
            }
            Some(Value::Array(subschemas)) => {
                for (index, (item, subschema)) in items.iter().zip(subschemas).enumerate() {
                    let child = pointer.child(&index.to_string());
                    self.check(subschema, root, item, &child, depth + 1);
                }
            }
            _ => {}
        }

        if let Some(min) = schema.get("minItems").and_then(Value::as_u64) {
            if (items.len() as u64) < min {
                self.report(pointer, format!("array has fewer than {min} items"));
            }
        }
        if let Some(max) = schema.get("maxItems").and_then(Value::as_u64) {
            if (items.len() as u64) > max {
                self.report(pointer, format!("array has more than {max} items"));
            }
        }
        if schema.get("uniqueItems").and_then(Value::as_bool) == Some(true) {
            for (index, item) in items.iter().enumerate() {
                if items[..index].contains(item) {
                    self.report(pointer, "array items are not unique".into());
                    break;
                }
            }
        }
    }

    fn check_string(
        &mut self,
        schema: &serde_json::Map<String, Value>,
        text: &str,
        pointer: &DocumentPointer,
    ) {
        let length = text.chars().count() as u64;
        if let Some(min) = schema.get("minLength").and_then(Value::as_u64) {
            if length < min {
                self.report(pointer, format!("string is shorter than {min} characters"));
            }
        }
        if let Some(max) = schema.get("maxLength").and_then(Value::as_u64) {
            if length > max {
                self.report(pointer, format!("string is longer than {max} characters"));
            }
        }
        if let Some(pattern) = schema.get("pattern").and_then(Value::as_str) {
            if let Ok(re) = regex::Regex::new(pattern) {
                if !re.is_match(text) {
                    self.report(pointer, format!("string does not match pattern '{pattern}'"));
                }
            }
        }
    }

    fn check_number(
        &mut self,
        schema: &serde_json::Map<String, Value>,
        instance: &Value,
        pointer: &DocumentPointer,
    ) {
        let Some(value) = instance.as_f64() else {
            return;
        };
        if let Some(min) = schema.get("minimum").and_then(Value::as_f64) {
            let exclusive = schema.get("exclusiveMinimum").and_then(Value::as_bool) == Some(true);
            if value < min || (exclusive && value == min) {
                self.report(pointer, format!("value is below the minimum of {min}"));
            }
        }
        if let Some(max) = schema.get("maximum").and_then(Value::as_f64) {
            let exclusive = schema.get("exclusiveMaximum").and_then(Value::as_bool) == Some(true);
            if value > max || (exclusive && value == max) {
                self.report(pointer, format!("value is above the maximum of {max}"));
            }
        }
        if let Some(divisor) = schema.get("multipleOf").and_then(Value::as_f64) {
            if divisor != 0.0 && (value / divisor).fract().abs() > f64::EPSILON {
                self.report(pointer, format!("value is not a multiple of {divisor}"));
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
