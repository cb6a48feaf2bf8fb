//! Unified error handling for semforge core.
//!
//! [`SemforgeError`] wraps the layer-specific error types so callers deal
//! with a single error surface. Categories and suggestions pass through
//! from the wrapped errors; the CLI maps categories to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for semforge core operations.
#[derive(Debug, Error, Clone)]
pub enum SemforgeError {
    /// Errors from the domain layer (schema violations).
    #[error("Schema error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// Convenience result alias.
pub type SemforgeResult<T> = Result<T, SemforgeError>;

/// High-level category of an error, used by the CLI for styling and exit
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid input data or schema violations.
    Validation,
    /// A requested resource does not exist or is unreachable.
    NotFound,
    /// Configuration file problems.
    Configuration,
    /// Internal failures.
    Internal,
}

impl SemforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(error) => error.suggestions(),
            Self::Application(error) => error.suggestions(),
            Self::Configuration { .. } => vec![
                "Check your configuration file syntax".into(),
                "Run 'semforge init' to create a fresh configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This is likely a bug in semforge".into(),
                "Please report it with the full error message".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(error) => match error.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(error) => match error.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
