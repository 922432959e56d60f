//! Scaffold service - the top-level generation sequence.
//!
//! Steps run in one fixed order: ensure the target directory, ensure the two
//! base files, create the specific interface, resolve the model, create the
//! specific repository, merge the binding config. Any failure stops the
//! sequence immediately; files written by earlier steps stay on disk (no
//! rollback), which is acceptable for an interactive developer tool.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Confirmer, Filesystem, MigrationRunner, ModelGenerator, TemplateRenderer},
        services::ConfigMerger,
    },
    domain::{Bindings, ClassRef, ProjectLayout, ScaffoldRequest, TemplateKind, Token},
    error::RepogenResult,
};

/// File-name suffix of the migration the notifications helper would create.
const NOTIFICATIONS_MIGRATION_SUFFIX: &str = "_create_notifications_table.php";

/// What one scaffold run did.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// Qualified interface reference.
    pub interface: ClassRef,
    /// Qualified repository reference.
    pub repository: ClassRef,
    /// Qualified model reference.
    pub model: ClassRef,
    /// Files written by this run, in creation order.
    pub created: Vec<PathBuf>,
    /// Files that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    /// Whether the binding config was rewritten.
    pub config_updated: bool,
    /// Whether model creation was delegated to the external generator.
    pub model_requested: bool,
}

/// One entry of a dry-run preview.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub already_exists: bool,
}

/// Main scaffolding service.
///
/// Owns the driven ports and the project layout; one instance serves one
/// invocation.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    confirmer: Box<dyn Confirmer>,
    models: Box<dyn ModelGenerator>,
    migrations: Box<dyn MigrationRunner>,
    layout: ProjectLayout,
}

impl ScaffoldService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        confirmer: Box<dyn Confirmer>,
        models: Box<dyn ModelGenerator>,
        migrations: Box<dyn MigrationRunner>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            confirmer,
            models,
            migrations,
            layout,
        }
    }

    /// Run the full generation sequence for a validated request.
    ///
    /// Validation already happened when `request` was constructed, so the
    /// first filesystem mutation can only occur after every input check has
    /// passed.
    #[instrument(skip_all, fields(interface = %request.interface(), repository = %request.repository()))]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> RepogenResult<ScaffoldReport> {
        let interface = self.layout.qualify_repository(request.interface())?;
        let repository = self.layout.qualify_repository(request.repository())?;
        let model = self.layout.qualify_model(request.model())?;
        let parent = match request.extends() {
            Some(parent) => self.layout.qualify_repository(parent)?,
            None => self.layout.base_repository(),
        };

        info!(%interface, %repository, %model, "Scaffolding repository");

        let mut report = ScaffoldReport {
            interface: interface.clone(),
            repository: repository.clone(),
            model: model.clone(),
            created: Vec::new(),
            skipped: Vec::new(),
            config_updated: false,
            model_requested: false,
        };

        // Nested namespaces get their parents created per file later; this
        // covers the common flat case and first-run projects.
        self.filesystem
            .create_dir_all(&self.layout.repositories_dir())?;

        self.ensure_base_file(TemplateKind::BaseInterface, &self.layout.base_interface(), &mut report)?;
        self.ensure_base_file(TemplateKind::BaseRepository, &self.layout.base_repository(), &mut report)?;

        let interface_created = self.create_interface(&interface, &mut report)?;
        self.resolve_model(&model, &mut report)?;
        let repository_created =
            self.create_repository(&repository, &interface, &model, &parent, &mut report)?;

        // A skipped interface or repository means the pair is already
        // recorded; re-merging would rewrite the config for nothing.
        if interface_created && repository_created {
            let merger = ConfigMerger::new(
                self.filesystem.as_ref(),
                self.renderer.as_ref(),
                self.layout.config_file(),
            );
            merger.merge(interface, repository)?;
            report.config_updated = true;
        }

        self.ensure_notifications_migration()?;

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Describe what [`Self::scaffold`] would touch, without writing anything.
    pub fn plan(&self, request: &ScaffoldRequest) -> RepogenResult<Vec<PlannedFile>> {
        let interface = self.layout.qualify_repository(request.interface())?;
        let repository = self.layout.qualify_repository(request.repository())?;

        let paths = [
            self.layout.path_for(&self.layout.base_interface()),
            self.layout.path_for(&self.layout.base_repository()),
            self.layout.path_for(&interface),
            self.layout.path_for(&repository),
            self.layout.config_file().to_path_buf(),
        ];

        Ok(paths
            .into_iter()
            .map(|path| PlannedFile {
                already_exists: self.filesystem.exists(&path),
                path,
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Step helpers
    // -------------------------------------------------------------------------

    /// Write a shared base file unless it already exists. Existing base
    /// files may carry manual edits and are never overwritten.
    fn ensure_base_file(
        &self,
        kind: TemplateKind,
        class: &ClassRef,
        report: &mut ScaffoldReport,
    ) -> RepogenResult<()> {
        let path = self.layout.path_for(class);
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Base file present, left untouched");
            report.skipped.push(path);
            return Ok(());
        }

        let bindings = Bindings::new().bind(Token::Namespace, class.namespace());
        let content = self.renderer.render(kind, &bindings)?;
        self.write(&path, &content)?;
        report.created.push(path);
        Ok(())
    }

    /// Returns `true` when the interface file was created in this run.
    fn create_interface(
        &self,
        interface: &ClassRef,
        report: &mut ScaffoldReport,
    ) -> RepogenResult<bool> {
        let path = self.layout.path_for(interface);
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Interface already generated, skipping");
            report.skipped.push(path);
            return Ok(false);
        }

        let bindings = Bindings::new()
            .bind(Token::Namespace, interface.namespace())
            .bind(Token::ClassName, interface.short_name())
            .bind(Token::Parent, self.layout.base_interface().as_str());
        let content = self
            .renderer
            .render(TemplateKind::ItemRepositoryInterface, &bindings)?;
        self.write(&path, &content)?;
        report.created.push(path);
        Ok(true)
    }

    /// When the model file is absent, ask for confirmation and hand the
    /// short name to the external generator. Never creates repository or
    /// interface files itself.
    fn resolve_model(&self, model: &ClassRef, report: &mut ScaffoldReport) -> RepogenResult<()> {
        let path = self.layout.path_for(model);
        if self.filesystem.exists(&path) {
            return Ok(());
        }

        let prompt = format!("Model {model} does not exist. Create it?");
        if self.confirmer.confirm(&prompt)? {
            info!(%model, "Delegating model creation");
            self.models.generate(model.short_name());
            report.model_requested = true;
        }
        Ok(())
    }

    /// Returns `true` when the repository file was created in this run.
    fn create_repository(
        &self,
        repository: &ClassRef,
        interface: &ClassRef,
        model: &ClassRef,
        parent: &ClassRef,
        report: &mut ScaffoldReport,
    ) -> RepogenResult<bool> {
        let path = self.layout.path_for(repository);
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Repository already generated, skipping");
            report.skipped.push(path);
            return Ok(false);
        }

        let bindings = Bindings::new()
            .bind(Token::Namespace, repository.namespace())
            .bind(Token::ClassName, repository.short_name())
            .bind(Token::Interface, interface.short_name())
            .bind(Token::Model, model.as_str())
            .bind(Token::Parent, parent.as_str());
        let content = self.renderer.render(TemplateKind::ItemRepository, &bindings)?;
        self.write(&path, &content)?;
        report.created.push(path);
        Ok(true)
    }

    /// Kick the notifications-table helper when no matching migration
    /// exists. Independent of the repository scaffolding itself.
    fn ensure_notifications_migration(&self) -> RepogenResult<()> {
        let existing = self
            .filesystem
            .find_matching(self.layout.migrations_dir(), NOTIFICATIONS_MIGRATION_SUFFIX)?;
        if existing.is_empty() {
            info!("No notifications migration found, delegating to the migration helper");
            self.migrations.notifications_table();
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> RepogenResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(path, content)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
