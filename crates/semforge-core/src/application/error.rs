//! Application layer errors.
//!
//! These represent failures in orchestration and at the edges of the
//! system: acquisition, parsing, filesystem work. Schema violations are
//! [`crate::domain::DomainError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The tool could not be executed, or exited uncleanly.
    #[error("descriptor fetch failed for '{tool}': {reason}")]
    DescriptorFetch { tool: String, reason: String },

    /// Captured text was not parseable as a descriptor document. The raw
    /// text is retained for diagnosis.
    #[error("descriptor for '{tool}' is not valid markup: {reason}")]
    DescriptorParse {
        tool: String,
        reason: String,
        raw: String,
    },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DescriptorFetch { tool, .. } => vec![
                format!("Check that '{}' is installed and on your PATH", tool),
                "Verify the launcher prefix in your configuration".into(),
                "Run the tool with --xml by hand to inspect its output".into(),
            ],
            Self::DescriptorParse { tool, .. } => vec![
                format!("Inspect the raw text logged for '{}'", tool),
                "Some tool families need compatibility mode to parse".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DescriptorFetch { .. } => ErrorCategory::NotFound,
            Self::DescriptorParse { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
