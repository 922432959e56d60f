//! Merge interface→repository bindings into the framework config file.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{BindingMap, Bindings, ClassRef, TemplateKind, Token},
    error::RepogenResult,
};

/// Load-upsert-serialize-save over the persisted binding table.
///
/// The merge is computed fully in memory and the file is then rewritten
/// whole; there are no partial-line edits. Concurrent writers are not
/// protected against: the last invocation wins, which matches single-shot
/// CLI semantics.
pub struct ConfigMerger<'a> {
    filesystem: &'a dyn Filesystem,
    renderer: &'a dyn TemplateRenderer,
    path: &'a Path,
}

impl<'a> ConfigMerger<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        renderer: &'a dyn TemplateRenderer,
        path: &'a Path,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            path,
        }
    }

    /// Load the persisted mapping.
    ///
    /// An absent backing file is the documented empty case and yields an
    /// empty map; only an actual read failure is an error.
    pub fn load(&self) -> RepogenResult<BindingMap> {
        if !self.filesystem.exists(self.path) {
            return Ok(BindingMap::new());
        }
        let text = self.filesystem.read_to_string(self.path)?;
        Ok(BindingMap::parse(&text))
    }

    /// Render the full config file for `map`, one line per entry in map
    /// iteration order.
    pub fn serialize(&self, map: &BindingMap) -> RepogenResult<String> {
        let list = map.to_lines().join("\n");
        self.renderer.render(
            TemplateKind::ConfigMapping,
            &Bindings::new().bind(Token::List, list),
        )
    }

    /// Overwrite the backing file with `content`, creating its directory
    /// first.
    pub fn save(&self, content: &str) -> RepogenResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(self.path, content)
    }

    /// The full merge: load, insert-or-overwrite one pair, rewrite.
    pub fn merge(&self, interface: ClassRef, repository: ClassRef) -> RepogenResult<BindingMap> {
        let mut map = self.load()?;
        map.upsert(interface, repository);
        let content = self.serialize(&map)?;
        self.save(&content)?;
        debug!(entries = map.len(), path = %self.path.display(), "Binding config rewritten");
        Ok(map)
    }
}
