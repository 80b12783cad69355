// ============================================================================
// domain/error.rs - DOMAIN ERRORS
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
    /// A path carries no usable (UTF-8) final component.
    #[error("path has no usable file name: {path}")]
    UnusableFileName { path: String },

    /// Artboard margins must be finite and non-negative.
    #[error("invalid artboard margin {value}: {reason}")]
    InvalidMargin { value: f64, reason: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnusableFileName { path } => vec![
                format!("The path '{}' does not end in a plain file name", path),
                "Rename the file to use UTF-8 characters".into(),
            ],
            Self::InvalidMargin { .. } => vec![
                "Pass a finite, non-negative margin in points".into(),
                "The classic behavior is a margin of 0".into(),
            ],
        }
    }
}
