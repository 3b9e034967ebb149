//! Error types for the coverletter CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for coverletter operations.
///
/// Every failure path ends in one of these variants; nothing in the crate
/// signals failure through the text channel.
#[derive(Error, Debug)]
pub enum LetterError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// One or more fields are empty, or there is no text to save.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A template, config or output file could not be read or written.
    #[error("{0}")]
    SourceError(String),

    /// The remote model or generation script failed. The message carries the
    /// raw diagnostic payload.
    #[error("Backend failed: {0}")]
    BackendError(String),
}

impl LetterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LetterError::UserError(_) => exit_codes::USER_ERROR,
            LetterError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            LetterError::SourceError(_) => exit_codes::SOURCE_FAILURE,
            LetterError::BackendError(_) => exit_codes::BACKEND_FAILURE,
        }
    }

    /// Whether this is a validation failure the user can fix by re-entering fields.
    pub fn is_validation(&self) -> bool {
        matches!(self, LetterError::ValidationError(_))
    }
}

/// Result type alias for coverletter operations.
pub type Result<T> = std::result::Result<T, LetterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = LetterError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = LetterError::ValidationError("one or more fields are empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.is_validation());
    }

    #[test]
    fn source_error_has_correct_exit_code() {
        let err = LetterError::SourceError("unreadable".to_string());
        assert_eq!(err.exit_code(), exit_codes::SOURCE_FAILURE);
        assert!(!err.is_validation());
    }

    #[test]
    fn backend_error_has_correct_exit_code() {
        let err = LetterError::BackendError("exit code 2".to_string());
        assert_eq!(err.exit_code(), exit_codes::BACKEND_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LetterError::ValidationError("one or more fields are empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: one or more fields are empty"
        );

        let err = LetterError::BackendError("HTTP 503: overloaded".to_string());
        assert_eq!(err.to_string(), "Backend failed: HTTP 503: overloaded");
    }
}
