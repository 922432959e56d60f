//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `repogen-adapters` crate provides the production implementations;
//! tests substitute in-memory or scripted doubles.

use std::path::{Path, PathBuf};

use crate::domain::{Bindings, TemplateKind};
use crate::error::RepogenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `repogen_adapters::filesystem::LocalFilesystem` (production)
/// - `repogen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> RepogenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> RepogenResult<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Files directly under `dir` whose name ends with `suffix`.
    ///
    /// A missing `dir` means no matches, not an error.
    fn find_matching(&self, dir: &Path, suffix: &str) -> RepogenResult<Vec<PathBuf>>;
}

/// Port for raw stub text lookup.
///
/// Implemented by:
/// - `repogen_adapters::stubs::BuiltinStubs` (embedded stub texts)
/// - `repogen_adapters::stubs::DirStubs` (published overrides on disk)
pub trait StubStore: Send + Sync {
    fn load(&self, kind: TemplateKind) -> RepogenResult<String>;
}

/// Port for stub rendering.
///
/// Reading the stub text is the only side effect; given equal stub content
/// and bindings the output is deterministic, and nothing is ever written.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, kind: TemplateKind, bindings: &Bindings) -> RepogenResult<String>;
}

/// Port for synchronous user confirmation.
///
/// The scaffold sequence blocks on this during model resolution. Automated
/// runs substitute `AlwaysConfirm` / `NeverConfirm` from the adapters crate.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> RepogenResult<bool>;
}

/// External model-creation collaborator (`make:model`).
///
/// Fire-and-forget: invoked with the model's short name, the result is not
/// inspected.
#[cfg_attr(test, mockall::automock)]
pub trait ModelGenerator: Send + Sync {
    fn generate(&self, model: &str);
}

/// External migration collaborator for the notifications table.
///
/// Invoked only when no notifications migration exists yet; independent of
/// the repository scaffolding itself.
#[cfg_attr(test, mockall::automock)]
pub trait MigrationRunner: Send + Sync {
    fn notifications_table(&self);
}
