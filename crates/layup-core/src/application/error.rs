//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The chosen source directory does not exist or is not a directory.
    #[error("source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// Directory enumeration failed.
    #[error("failed to scan {path}: {reason}")]
    ScanFailed { path: PathBuf, reason: String },

    /// The folder prompt itself failed (as opposed to being dismissed).
    #[error("folder selection failed: {reason}")]
    PickerFailed { reason: String },

    /// The drawing host rejected or botched an operation.
    #[error("drawing host failed during {operation}: {reason}")]
    HostFailure {
        operation: &'static str,
        reason: String,
    },

    /// Host state access failed (lock poisoned, etc.).
    #[error("drawing host state unavailable")]
    HostStatePoisoned,

    /// An operation referenced a handle the host never issued.
    #[error("unknown {kind} handle: {handle}")]
    UnknownHandle {
        kind: &'static str,
        handle: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceDirNotFound { path } => vec![
                format!("No directory at: {}", path.display()),
                "Check the path for typos".into(),
                "Pass --dir to point at the folder of PDFs".into(),
            ],
            Self::ScanFailed { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that you have read permissions on the folder".into(),
            ],
            Self::PickerFailed { .. } => vec![
                "The folder prompt could not be shown".into(),
                "Pass --dir to skip the prompt entirely".into(),
            ],
            Self::HostFailure { operation, .. } => vec![
                format!("The drawing host failed while trying to {}", operation),
                "Check that every file in the folder is a readable PDF".into(),
            ],
            Self::HostStatePoisoned => vec![
                "The host state is unavailable".into(),
                "Try again in a moment".into(),
            ],
            Self::UnknownHandle { .. } => vec![
                "An internal handle went stale".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceDirNotFound { .. } => ErrorCategory::NotFound,
            Self::ScanFailed { .. } | Self::PickerFailed { .. } => ErrorCategory::Internal,
            Self::HostFailure { .. } => ErrorCategory::Internal,
            Self::HostStatePoisoned | Self::UnknownHandle { .. } => ErrorCategory::Internal,
        }
    }
}
