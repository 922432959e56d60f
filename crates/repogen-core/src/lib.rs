//! repogen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the repogen
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          repogen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, ConfigMerger)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StubStore, Renderer,       │
//! │  Confirmer, external collaborators)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    repogen-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ClassRef, ProjectLayout, BindingMap,   │
//! │  stub tokens, ScaffoldRequest)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repogen_core::{application::ScaffoldService, domain::ScaffoldRequest};
//!
//! # fn run(service: ScaffoldService) -> repogen_core::error::RepogenResult<()> {
//! let request = ScaffoldRequest::new("UserRepositoryInterface", "UserRepository", "User")?;
//! let report = service.scaffold(&request)?;
//! println!("created {} files", report.created.len());
//! # Ok(())
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigMerger, PlannedFile, ScaffoldReport, ScaffoldService,
        ports::{
            Confirmer, Filesystem, MigrationRunner, ModelGenerator, StubStore, TemplateRenderer,
        },
    };
    pub use crate::domain::{
        BindingMap, Bindings, ClassRef, ProjectLayout, ScaffoldRequest, TemplateKind, Token,
    };
    pub use crate::error::{RepogenError, RepogenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
