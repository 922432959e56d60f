//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use repogen_core::{application::ports::Filesystem, error::RepogenResult};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> RepogenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> RepogenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn find_matching(&self, dir: &Path, suffix: &str) -> RepogenResult<Vec<PathBuf>> {
        // A project without the directory simply has no matches yet.
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                map_io_error(dir, io::Error::other(e), "scan directory")
            })?;
            if entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(suffix))
            {
                matches.push(entry.into_path());
            }
        }
        Ok(matches)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> repogen_core::error::RepogenError {
    use repogen_core::application::ApplicationError;

    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("nested").join("file.php");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "<?php // hi").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "<?php // hi");
    }

    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs.read_to_string(&dir.path().join("absent.php")).unwrap_err();
        assert!(err.to_string().contains("absent.php"));
    }

    #[test]
    fn find_matching_filters_by_suffix_in_one_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let migrations = dir.path().join("migrations");
        fs.create_dir_all(&migrations).unwrap();
        fs.write_file(
            &migrations.join("2024_01_01_000000_create_notifications_table.php"),
            "<?php",
        )
        .unwrap();
        fs.write_file(&migrations.join("2024_01_02_000000_create_users_table.php"), "<?php")
            .unwrap();

        let found = fs
            .find_matching(&migrations, "_create_notifications_table.php")
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn find_matching_in_a_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let found = fs
            .find_matching(&dir.path().join("nope"), ".php")
            .unwrap();
        assert!(found.is_empty());
    }
}
