//! Error types for oaslint operations.
//!
//! This module defines [`OaslintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `OaslintError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `OaslintError::Other`) for unexpected errors
//! - Parse errors and rule contract errors abort a validation call outright;
//!   callers get either a complete result list or a single structured error

use thiserror::Error;

/// Core error type for oaslint operations.
#[derive(Debug, Error)]
pub enum OaslintError {
    /// Input content does not conform to the expected document grammar.
    #[error("Failed to parse API document: {message}")]
    Parse { message: String },

    /// A check declared an unsupported result type. This is a defect in the
    /// rule, not in the document under validation.
    #[error("Unsupported return type from check '{check}' of rule '{rule}': {type_name}")]
    RuleContract {
        rule: String,
        check: String,
        type_name: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for oaslint operations.
pub type Result<T> = std::result::Result<T, OaslintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_message() {
        let err = OaslintError::Parse {
            message: "unexpected token at line 3".into(),
        };
        assert!(err.to_string().contains("unexpected token at line 3"));
    }

    #[test]
    fn rule_contract_error_names_type_rule_and_check() {
        let err = OaslintError::RuleContract {
            rule: "101".into(),
            check: "validate".into(),
            type_name: "alloc::string::String".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("alloc::string::String"));
        assert!(msg.contains("101"));
        assert!(msg.contains("validate"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OaslintError = io_err.into();
        assert!(matches!(err, OaslintError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(OaslintError::Parse {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
