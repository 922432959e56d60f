//! Domain errors: input validation and namespace qualification failures.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Business-rule violations.
///
/// All variants are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (carry suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The `--interface` option was omitted or blank.
    #[error("no interface name given")]
    MissingInterfaceInput,

    /// The `--repository` option was omitted or blank.
    #[error("no repository class given")]
    MissingRepositoryInput,

    /// The `--model` option was omitted or blank.
    #[error("no model class given")]
    MissingModelInput,

    /// Qualification kept prepending the root namespace without ever
    /// producing a reference under it. Only a broken root namespace can
    /// cause this, so it is treated as fatal misconfiguration rather than
    /// a user mistake.
    #[error("qualification of '{input}' did not converge under root namespace '{root}'")]
    MalformedNamespace { input: String, root: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingInterfaceInput => vec![
                "Pass the interface name: --interface UserRepositoryInterface".into(),
            ],
            Self::MissingRepositoryInput => vec![
                "Pass the repository class: --repository UserRepository".into(),
            ],
            Self::MissingModelInput => {
                vec!["Pass the backing model: --model User".into()]
            }
            Self::MalformedNamespace { root, .. } => vec![
                format!("The configured root namespace '{root}' cannot prefix itself"),
                "Check the [namespace] section of your repogen.toml".into(),
            ],
        }
    }

    /// Error category for CLI display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInterfaceInput
            | Self::MissingRepositoryInput
            | Self::MissingModelInput => ErrorCategory::Validation,
            Self::MalformedNamespace { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_categorized_as_validation() {
        assert_eq!(
            DomainError::MissingInterfaceInput.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::MissingModelInput.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn malformed_namespace_is_a_configuration_fault() {
        let err = DomainError::MalformedNamespace {
            input: "User".into(),
            root: "\\App".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("repogen.toml")));
    }

    #[test]
    fn every_error_has_suggestions() {
        for err in [
            DomainError::MissingInterfaceInput,
            DomainError::MissingRepositoryInput,
            DomainError::MissingModelInput,
        ] {
            assert!(!err.suggestions().is_empty());
        }
    }
}
