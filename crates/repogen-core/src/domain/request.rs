//! Validated scaffold command inputs.

use crate::domain::error::DomainError;

/// The validated (interface, repository, model) triple, plus the optional
/// parent-class override.
///
/// Constructing a request *is* the input-validation step: a value of this
/// type always carries three non-empty, trimmed inputs, so the orchestration
/// sequence never re-checks them. A validation failure therefore guarantees
/// zero filesystem side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    interface: String,
    repository: String,
    model: String,
    extends: Option<String>,
}

impl ScaffoldRequest {
    /// Validate the three inputs.
    ///
    /// Priority is fixed: interface, then repository, then model. A later
    /// field is never inspected before every earlier one is satisfied, so
    /// with all three blank the reported error is `MissingInterfaceInput`.
    pub fn new(interface: &str, repository: &str, model: &str) -> Result<Self, DomainError> {
        let interface = interface.trim();
        if interface.is_empty() {
            return Err(DomainError::MissingInterfaceInput);
        }
        let repository = repository.trim();
        if repository.is_empty() {
            return Err(DomainError::MissingRepositoryInput);
        }
        let model = model.trim();
        if model.is_empty() {
            return Err(DomainError::MissingModelInput);
        }
        Ok(Self {
            interface: interface.to_string(),
            repository: repository.to_string(),
            model: model.to_string(),
            extends: None,
        })
    }

    /// Override the parent class generated repositories extend.
    ///
    /// Blank input leaves the default parent in place.
    pub fn with_extends(mut self, parent: &str) -> Self {
        let parent = parent.trim();
        if !parent.is_empty() {
            self.extends = Some(parent.to_string());
        }
        self
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
