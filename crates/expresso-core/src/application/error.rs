//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The user declined to erase a non-empty destination. A clean abort:
    /// the guard guarantees nothing was written.
    #[error("Aborted: destination {path} left untouched")]
    Aborted { path: PathBuf },

    /// Filesystem operation failed; `path` is the offending location.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The catalog has no payload for a manifest key. A defect in the
    /// catalog tables, since resolving validated the combination.
    #[error("No template payload registered for key: {key}")]
    MissingTemplate { key: String },

    /// Template rendering failed.
    #[error("Rendering failed for {key}: {reason}")]
    RenderingFailed { key: String, reason: String },

    /// Serializing a derived artifact (package.json) failed.
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Aborted { path } => vec![
                format!("Nothing was written to {}", path.display()),
                "Re-run with --force to skip the confirmation".into(),
                "Or pick an empty destination with --dir".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::MissingTemplate { key } => vec![
                format!("Payload missing from the embedded catalog: {key}"),
                "This is a defect in the catalog tables, please report it".into(),
            ],
            Self::RenderingFailed { .. } | Self::SerializationFailed { .. } => {
                vec!["This is likely a bug, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Aborted { .. } => ErrorCategory::Aborted,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::MissingTemplate { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } | Self::SerializationFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
