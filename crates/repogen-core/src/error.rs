//! Unified error handling for repogen-core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for repogen-core operations.
#[derive(Debug, Error, Clone)]
pub enum RepogenError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RepogenError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in repogen".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Error category for display/styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input; fixed by re-invoking with correct options.
    Validation,
    /// Broken setup; fixed by editing configuration.
    Configuration,
    /// A named resource could not be found.
    NotFound,
    /// Filesystem read/write failure.
    Io,
    /// Everything else.
    Internal,
}

/// Convenient result type alias.
pub type RepogenResult<T> = Result<T, RepogenError>;
