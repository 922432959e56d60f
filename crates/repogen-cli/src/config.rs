//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the derived
//! [`ProjectLayout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (parse errors are fatal)
//! 2. `repogen.toml` in the current directory
//! 3. The platform config dir (see [`AppConfig::config_path`])
//! 4. Built-in Laravel-convention defaults

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use repogen_core::domain::ProjectLayout;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace conventions of the target project.
    pub namespace: NamespaceConfig,
    /// Filesystem locations, relative to the project root.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Root namespace the app dir maps to.
    pub root: String,
    /// Sub-namespace generated repositories live under.
    pub repositories: String,
    /// Sub-namespace models live under.
    pub models: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            root: "App".into(),
            repositories: "Repositories".into(),
            models: "Models".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub app_dir: PathBuf,
    pub config_file: PathBuf,
    pub migrations_dir: PathBuf,
    /// Directory of published `.stub` overrides, if any.
    pub stubs_dir: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("app"),
            config_file: PathBuf::from("config/repositories.php"),
            migrations_dir: PathBuf::from("database/migrations"),
            stubs_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration following the resolution order above.
    ///
    /// An explicit `--config` path must parse; the implicit candidates fall
    /// through to the defaults only when the file is absent, never when it
    /// is malformed.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::read(path);
        }

        for candidate in [PathBuf::from("repogen.toml"), Self::config_path()] {
            if candidate.is_file() {
                return Self::read(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn read(path: &PathBuf) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config '{}'", path.display()))
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.repogen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "repogen", "repogen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".repogen.toml"))
    }

    /// The project layout as the core sees it.
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(
            self.namespace.root.as_str(),
            self.namespace.repositories.as_str(),
            self.namespace.models.as_str(),
            self.paths.app_dir.as_path(),
            self.paths.config_file.as_path(),
            self.paths.migrations_dir.as_path(),
        )
    }
}
