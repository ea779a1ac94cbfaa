//! Parsed-document model and content parsing.
//!
//! This module provides the in-memory form of an API description document
//! and the parsing collaborator the validator drives:
//!
//! - [`ApiDocument`] / [`DocumentKind`] - the parsed document and its format tag
//! - [`DocumentPointer`] - RFC 6901 location addressing within a document
//! - [`ContentParser`] / [`OpenApiParser`] - raw text to [`ApiDocument`]

pub mod model;
pub mod parser;
pub mod pointer;

pub use model::{ApiDocument, DocumentKind};
pub use parser::{ContentParseResult, ContentParser, OpenApiParser};
pub use pointer::DocumentPointer;
