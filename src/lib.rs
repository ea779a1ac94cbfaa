//! oaslint - Guideline compliance checker for API descriptions.
//!
//! Library modules:
//! - `cli` - Command-line interface and dispatch
//! - `document` - API document parsing and JSON Pointer locations
//! - `error` - Error types
//! - `output` - Result formatters
//! - `rule` - Rule model, registry, invocation and validation
//! - `schema` - JSON Schema validation and schema loading

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod rule;
pub mod schema;

pub use error::{OaslintError, Result};
