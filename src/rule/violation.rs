//! Guideline violations.

use crate::document::DocumentPointer;

/// One concrete guideline breach at a specific document location.
///
/// Value type; equal violations are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable description of the breach.
    pub message: String,
    /// Where in the document it was found (may be the root).
    pub pointer: DocumentPointer,
}

impl Violation {
    /// Create a violation at a specific location.
    pub fn new(message: impl Into<String>, pointer: DocumentPointer) -> Self {
        Self {
            message: message.into(),
            pointer,
        }
    }

    /// Create a violation at the document root.
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new(message, DocumentPointer::root())
    }
}
