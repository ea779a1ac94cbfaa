//! Document location pointers.
//!
//! This module provides [`DocumentPointer`], an RFC 6901 JSON Pointer used
//! to address the location of a violation inside a parsed API document.

use serde::{Deserialize, Serialize};

/// A location inside a parsed API document, in RFC 6901 text form.
///
/// The empty pointer addresses the document root. Child tokens are escaped
/// on construction (`~` becomes `~0`, `/` becomes `~1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentPointer(String);

impl DocumentPointer {
    /// The pointer addressing the document root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Create a pointer from an already-escaped RFC 6901 string.
    pub fn new(pointer: impl Into<String>) -> Self {
        Self(pointer.into())
    }

    /// Return a pointer one level deeper, escaping the token.
    pub fn child(&self, token: &str) -> Self {
        let escaped = token.replace('~', "~0").replace('/', "~1");
        Self(format!("{}/{}", self.0, escaped))
    }

    /// Whether this pointer addresses the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The escaped RFC 6901 text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
