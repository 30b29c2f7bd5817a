// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
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
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Duplicate destination path in manifest: {path}")]
    DuplicateDestination { path: String },

    #[error("Destination path escapes the target directory: {path}")]
    PathEscapesDestination { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("'{selection}' is not available under the {variant} variant: {reason}")]
    IncompatibleSelection {
        selection: String,
        variant: String,
        reason: String,
    },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// A configuration combination has no catalog entry. Resolving never
    /// silently skips; an unknown combination fails the run before any
    /// file is written.
    #[error("no catalog entry for combination: {0}")]
    UnknownCombination(String),

    // ========================================================================
    // Assembly Invariant Violations (defects, not user errors)
    // ========================================================================
    #[error("duplicate module key in assembly: {key}")]
    DuplicateModuleKey { key: String },

    #[error("middleware or mount references unknown module key: {key}")]
    DanglingModuleKey { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSelection(msg) => vec![
                format!("Details: {}", msg),
                "Run `expresso list` to see the supported option matrix".into(),
            ],
            Self::InvalidAppName { name, reason } => vec![
                format!("Application name '{}' is invalid: {}", name, reason),
                "Use letters, digits, spaces, hyphens or underscores".into(),
            ],
            Self::IncompatibleSelection {
                selection, variant, ..
            } => vec![
                format!("'{}' cannot be combined with the {} variant", selection, variant),
                "View engines and mongojs require --lang js".into(),
                "Run `expresso list` to see per-variant availability".into(),
            ],
            Self::UnknownCombination(combo) => vec![
                format!("No templates are registered for: {}", combo),
                "This combination is not supported; pick another database or view engine".into(),
            ],
            Self::DuplicateModuleKey { .. } | Self::DanglingModuleKey { .. } => vec![
                "This is a defect in the assembly stages, not a usage error".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSelection(_) | Self::InvalidAppName { .. } => ErrorCategory::Validation,
            Self::IncompatibleSelection { .. } => ErrorCategory::Compatibility,
            Self::UnknownCombination(_) => ErrorCategory::Compatibility,
            Self::DuplicateModuleKey { .. } | Self::DanglingModuleKey { .. } => {
                ErrorCategory::Internal
            }
            Self::DuplicateDestination { .. }
            | Self::PathEscapesDestination { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
