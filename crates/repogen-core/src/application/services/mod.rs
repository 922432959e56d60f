//! Application services.

pub mod config_merger;
pub mod scaffold_service;

pub use config_merger::ConfigMerger;
pub use scaffold_service::{PlannedFile, ScaffoldReport, ScaffoldService};
