//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use repogen_core::application::ports::Filesystem;
use repogen_core::error::RepogenResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> RepogenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| repogen_core::application::ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| repogen_core::application::ApplicationError::LockPoisoned)?;

        // Parent must exist, same contract as the real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(repogen_core::application::ApplicationError::Io {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> RepogenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| repogen_core::application::ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            repogen_core::application::ApplicationError::Io {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn find_matching(&self, dir: &Path, suffix: &str) -> RepogenResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| repogen_core::application::ApplicationError::LockPoisoned)?;

        Ok(inner
            .files
            .keys()
            .filter(|p| {
                p.parent() == Some(dir)
                    && p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(suffix))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.php"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.php"), "x").is_ok());
    }

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn seed_creates_parents_implicitly() {
        let fs = MemoryFilesystem::new();
        fs.seed("app/Models/User.php", "<?php");
        assert!(fs.exists(Path::new("app/Models")));
        assert_eq!(fs.read_to_string(Path::new("app/Models/User.php")).unwrap(), "<?php");
    }

    #[test]
    fn find_matching_only_looks_at_direct_children() {
        let fs = MemoryFilesystem::new();
        fs.seed("m/2024_create_notifications_table.php", "x");
        fs.seed("m/sub/2025_create_notifications_table.php", "x");
        fs.seed("m/2024_create_users_table.php", "x");

        let found = fs
            .find_matching(Path::new("m"), "_create_notifications_table.php")
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
