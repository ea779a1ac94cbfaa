//! Parsed API document model.
//!
//! An [`ApiDocument`] is the in-memory form a validation run operates on:
//! the raw JSON tree plus a [`DocumentKind`] tag used for rule dispatch.

use serde_json::Value;

/// The recognized API description formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Swagger 2.0 (`swagger: "2.0"`).
    Swagger2,
    /// OpenAPI 3.x (`openapi: "3.*"`).
    OpenApi3,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Swagger2 => write!(f, "swagger-2.0"),
            DocumentKind::OpenApi3 => write!(f, "openapi-3"),
        }
    }
}

/// A successfully parsed API description document.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    /// Which format the document was classified as.
    pub kind: DocumentKind,
    /// The parsed JSON tree (YAML input is converted on parse).
    pub tree: Value,
    /// The original raw text.
    pub raw: String,
}

impl ApiDocument {
    /// Create a document from its parts.
    pub fn new(kind: DocumentKind, tree: Value, raw: impl Into<String>) -> Self {
        Self {
            kind,
            tree,
            raw: raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", DocumentKind::Swagger2), "swagger-2.0");
        assert_eq!(format!("{}", DocumentKind::OpenApi3), "openapi-3");
    }

    #[test]
    fn document_holds_tree_and_raw() {
        let doc = ApiDocument::new(
            DocumentKind::Swagger2,
            json!({"swagger": "2.0"}),
            "{\"swagger\": \"2.0\"}",
        );
        assert_eq!(doc.kind, DocumentKind::Swagger2);
        assert_eq!(doc.tree["swagger"], "2.0");
        assert!(doc.raw.contains("swagger"));
    }
}
