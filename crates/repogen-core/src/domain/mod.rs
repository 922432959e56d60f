//! Core domain layer for repogen.
//!
//! Pure business logic with no I/O: class-reference qualification, path
//! derivation, stub placeholder substitution, the binding table, and input
//! validation. Filesystem, prompting, and external-process concerns are
//! reached only through the ports defined in the application layer.

pub mod class_ref;
pub mod config_map;
pub mod error;
pub mod layout;
pub mod request;
pub mod template;

// Re-exports for convenience
pub use class_ref::{ClassRef, NAMESPACE_SEPARATOR};
pub use config_map::BindingMap;
pub use error::DomainError;
pub use layout::{BASE_INTERFACE_NAME, BASE_REPOSITORY_NAME, ProjectLayout};
pub use request::ScaffoldRequest;
pub use template::{Bindings, TemplateKind, Token, substitute};
