//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the adapters.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem read or write failed.
    ///
    /// Every I/O problem surfaces as this variant so callers can tell it
    /// apart from validation failures instead of seeing a swallowed error.
    #[error("I/O failure at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// No stub text is available for a template.
    #[error("no stub registered for template '{name}'")]
    StubMissing { name: &'static str },

    /// Stub rendering failed.
    #[error("stub rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Shared filesystem state lock was poisoned (in-memory adapter).
    #[error("filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run the command from the project root".into(),
            ],
            Self::StubMissing { name } => vec![
                format!("No stub named '{name}.stub' was found"),
                "Remove the stubs_dir override or add the missing stub file".into(),
            ],
            Self::RenderingFailed { .. } => {
                vec!["Check your published stub files for syntax damage".into()]
            }
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::Io,
            Self::StubMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
