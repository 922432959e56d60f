//! External artisan collaborators.
//!
//! Model creation and the notifications-table migration belong to the host
//! framework; repogen only kicks them off. Calls are fire-and-forget: the
//! outcome is logged but never inspected, and a missing `php` binary does
//! not fail the scaffold run.

use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use repogen_core::application::ports::{MigrationRunner, ModelGenerator};
use tracing::{debug, warn};

/// Shells out to `php artisan` in the current working directory.
#[derive(Debug, Clone)]
pub struct ArtisanRunner {
    php_binary: String,
}

impl ArtisanRunner {
    pub fn new() -> Self {
        Self {
            php_binary: "php".into(),
        }
    }

    /// Use a specific PHP interpreter instead of `php` from PATH.
    pub fn with_php(php_binary: impl Into<String>) -> Self {
        Self {
            php_binary: php_binary.into(),
        }
    }

    fn call(&self, args: &[&str]) {
        let outcome = Command::new(&self.php_binary)
            .arg("artisan")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match outcome {
            Ok(status) if status.success() => debug!(?args, "artisan call finished"),
            Ok(status) => warn!(?args, %status, "artisan call exited non-zero"),
            Err(e) => warn!(?args, error = %e, "artisan call could not be started"),
        }
    }
}

impl Default for ArtisanRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGenerator for ArtisanRunner {
    fn generate(&self, model: &str) {
        self.call(&["make:model", model]);
    }
}

impl MigrationRunner for ArtisanRunner {
    fn notifications_table(&self) {
        self.call(&["notifications:table"]);
    }
}

/// Collaborator double that records invocations (testing helper).
#[derive(Debug, Clone, Default)]
pub struct RecordingCollaborator {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ModelGenerator for RecordingCollaborator {
    fn generate(&self, model: &str) {
        self.calls.lock().unwrap().push(format!("make:model {model}"));
    }
}

impl MigrationRunner for RecordingCollaborator {
    fn notifications_table(&self) {
        self.calls.lock().unwrap().push("notifications:table".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_missing_interpreter_does_not_panic() {
        let runner = ArtisanRunner::with_php("definitely-not-a-real-php-binary");
        runner.generate("User");
        runner.notifications_table();
    }

    #[test]
    fn recording_collaborator_tracks_calls_in_order() {
        let rec = RecordingCollaborator::new();
        rec.generate("User");
        rec.notifications_table();
        assert_eq!(rec.calls(), ["make:model User", "notifications:table"]);
    }
}
