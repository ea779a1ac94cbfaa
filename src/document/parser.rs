//! Content parsing.
//!
//! This module defines the [`ContentParser`] collaborator the validator
//! drives, its tagged [`ContentParseResult`], and [`OpenApiParser`], the
//! default implementation accepting JSON or YAML OpenAPI/Swagger documents.

use serde_json::Value;

use super::model::{ApiDocument, DocumentKind};

/// Outcome of a parse attempt.
#[derive(Debug)]
pub enum ContentParseResult {
    /// The content parsed and was classified as a known document kind.
    ParsedSuccessfully(ApiDocument),
    /// The content could not be parsed or classified.
    ParseFailed(String),
}

/// Parses raw content into an [`ApiDocument`].
///
/// The engine does not specify the document grammar; it only requires this
/// tagged result shape. The optional authorization value is available for
/// parsers that resolve protected remote references.
pub trait ContentParser: Send + Sync {
    /// Parse `content` into a document, or report why it cannot be parsed.
    fn parse(&self, content: &str, authorization: Option<&str>) -> ContentParseResult;
}

/// Default parser for OpenAPI and Swagger documents in JSON or YAML.
pub struct OpenApiParser;

impl OpenApiParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    fn read_tree(content: &str) -> Result<Value, String> {
        // JSON first for the precise error position, then YAML.
        match serde_json::from_str::<Value>(content) {
            Ok(tree) => Ok(tree),
            Err(json_err) => match serde_yaml::from_str::<Value>(content) {
                Ok(tree) => Ok(tree),
                Err(yaml_err) => {
                    if content.trim_start().starts_with(['{', '[']) {
                        Err(format!("invalid JSON: {json_err}"))
                    } else {
                        Err(format!("invalid YAML: {yaml_err}"))
                    }
                }
            },
        }
    }

    fn classify(tree: &Value) -> Result<DocumentKind, String> {
        if !tree.is_object() {
            return Err("document root is not an object".to_string());
        }
        if tree.get("swagger").and_then(Value::as_str) == Some("2.0") {
            return Ok(DocumentKind::Swagger2);
        }
        match tree.get("openapi").and_then(Value::as_str) {
            Some(version) if version.starts_with("3.") => Ok(DocumentKind::OpenApi3),
            Some(version) => Err(format!("unsupported openapi version '{version}'")),
            None => Err("neither 'swagger: \"2.0\"' nor an 'openapi' version found".to_string()),
        }
    }
}

impl Default for OpenApiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentParser for OpenApiParser {
    fn parse(&self, content: &str, _authorization: Option<&str>) -> ContentParseResult {
        let tree = match Self::read_tree(content) {
            Ok(tree) => tree,
            Err(message) => return ContentParseResult::ParseFailed(message),
        };
        match Self::classify(&tree) {
            Ok(kind) => ContentParseResult::ParsedSuccessfully(ApiDocument::new(
                kind,
                tree,
                content.to_string(),
            )),
            Err(message) => ContentParseResult::ParseFailed(message),
        }
    }
}
