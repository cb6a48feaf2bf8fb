// ============================================================================
// domain/error.rs - SCHEMA VIOLATION DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Per-parameter schema violations
    // ========================================================================
    #[error("parameter '{parameter}' is file-like but declares no channel")]
    MissingChannel { parameter: String },

    #[error("parameter '{parameter}' declares channel '{value}', expected 'input' or 'output'")]
    InvalidChannel { parameter: String, value: String },

    #[error("parameter of kind '{kind}' declares neither a name nor a flag")]
    MissingName { kind: String },

    #[error("unknown parameter kind tag '{tag}'")]
    UnknownParameterKind { tag: String },

    #[error("parameter '{parameter}' declares unparseable index '{value}'")]
    InvalidIndex { parameter: String, value: String },

    // ========================================================================
    // Per-tool schema violations
    // ========================================================================
    #[error("tool '{tool}' declares no category")]
    MissingCategory { tool: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingChannel { parameter } => vec![
                format!("Add a <channel> element to parameter '{}'", parameter),
                "File-like parameters must declare 'input' or 'output'".into(),
            ],
            Self::InvalidChannel { parameter, value } => vec![
                format!("Parameter '{}' declares channel '{}'", parameter, value),
                "Valid channel values are 'input' and 'output'".into(),
            ],
            Self::MissingCategory { tool } => vec![
                format!("The descriptor for '{}' has no usable <category> field", tool),
                "Category paths place generated code in the package tree".into(),
            ],
            Self::UnknownParameterKind { tag } => vec![
                format!("'{}' is not a recognised parameter tag", tag),
                "Known kinds: integer, float, double, boolean, string, file, directory, \
                 image, geometry, transform, table, point, region"
                    .into(),
                "Vector and enumeration variants use the '-vector' / '-enumeration' suffix".into(),
            ],
            _ => vec!["Fix the descriptor emitted by the tool and re-run".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingChannel { .. }
            | Self::InvalidChannel { .. }
            | Self::MissingName { .. }
            | Self::UnknownParameterKind { .. }
            | Self::InvalidIndex { .. }
            | Self::MissingCategory { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

// ============================================================================
// TESTS
// ============================================================================
