//! Infrastructure adapters for repogen.
//!
//! This crate implements the ports defined in `repogen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod confirm;
pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod stubs;

// Re-export commonly used adapters
pub use confirm::{AlwaysConfirm, NeverConfirm};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::ArtisanRunner;
pub use renderer::StubRenderer;
pub use stubs::{BuiltinStubs, DirStubs};
