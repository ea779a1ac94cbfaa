//! JSON-Schema validation component.
//!
//! The engine treats schema validation as a collaborator: the
//! schema-compliance rule wraps a [`JsonSchemaValidator`] and only consumes
//! its message list. Loading (bundled resources, optional override URL with
//! fallback) lives in [`loader`].

pub mod loader;
pub mod validator;

pub use loader::{bundled_validator, load_validator, SchemaRuleConfig};
pub use validator::{JsonSchemaValidator, SchemaMessage, SchemaValidation};
