//! Project layout conventions and class-reference qualification.
//!
//! [`ProjectLayout`] is the single place that knows how namespaces map onto
//! the host project's directory tree. Everything here is pure: qualification
//! and path derivation never touch the filesystem.

use std::path::{Path, PathBuf};

use crate::domain::class_ref::{ClassRef, NAMESPACE_SEPARATOR};
use crate::domain::error::DomainError;

/// Upper bound on qualification passes.
///
/// One pass normalizes an already-qualified input; a second qualifies a bare
/// name. A reference still outside the root namespace after that can only
/// mean the root namespace itself is broken, which is a configuration fault,
/// not a runtime condition.
const MAX_QUALIFY_PASSES: usize = 2;

/// Class name of the shared parent interface.
pub const BASE_INTERFACE_NAME: &str = "RepositoryInterface";

/// Class name of the shared parent repository.
pub const BASE_REPOSITORY_NAME: &str = "BaseRepository";

/// Namespace and filesystem conventions of the target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root_namespace: String,
    repositories_segment: String,
    models_segment: String,
    app_dir: PathBuf,
    config_file: PathBuf,
    migrations_dir: PathBuf,
}

impl Default for ProjectLayout {
    /// Laravel conventions: `App\` maps onto `app/`, models live in
    /// `App\Models`, generated repositories in `App\Repositories`.
    fn default() -> Self {
        Self {
            root_namespace: "App".into(),
            repositories_segment: "Repositories".into(),
            models_segment: "Models".into(),
            app_dir: PathBuf::from("app"),
            config_file: PathBuf::from("config/repositories.php"),
            migrations_dir: PathBuf::from("database/migrations"),
        }
    }
}

impl ProjectLayout {
    pub fn new(
        root_namespace: impl Into<String>,
        repositories_segment: impl Into<String>,
        models_segment: impl Into<String>,
        app_dir: impl Into<PathBuf>,
        config_file: impl Into<PathBuf>,
        migrations_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_namespace: root_namespace.into(),
            repositories_segment: repositories_segment.into(),
            models_segment: models_segment.into(),
            app_dir: app_dir.into(),
            config_file: config_file.into(),
            migrations_dir: migrations_dir.into(),
        }
    }

    // ── Qualification ─────────────────────────────────────────────────────

    /// Qualify an interface or repository input under the repository
    /// namespace. Idempotent for already-qualified references.
    pub fn qualify_repository(&self, input: &str) -> Result<ClassRef, DomainError> {
        self.qualify(input, &self.repositories_segment)
    }

    /// Qualify a model input under the model namespace.
    pub fn qualify_model(&self, input: &str) -> Result<ClassRef, DomainError> {
        self.qualify(input, &self.models_segment)
    }

    /// Bounded normalization loop.
    ///
    /// Each pass strips leading delimiters and converts `/` to the namespace
    /// separator, then checks whether the reference sits under the root
    /// namespace; if not, `<root>\<segment>\` is prepended and the loop runs
    /// once more. Non-convergence within [`MAX_QUALIFY_PASSES`] is reported
    /// as [`DomainError::MalformedNamespace`].
    ///
    /// Emptiness is the caller's problem: blank input is rejected by
    /// [`crate::domain::ScaffoldRequest`] before qualification runs.
    fn qualify(&self, input: &str, segment: &str) -> Result<ClassRef, DomainError> {
        let mut name = input.to_string();
        for _ in 0..MAX_QUALIFY_PASSES {
            name = normalize(&name);
            if self.is_qualified(&name) {
                return Ok(ClassRef::new(name));
            }
            name = format!(
                "{root}{sep}{segment}{sep}{name}",
                root = self.root_namespace,
                sep = NAMESPACE_SEPARATOR,
            );
        }
        Err(DomainError::MalformedNamespace {
            input: input.to_string(),
            root: self.root_namespace.clone(),
        })
    }

    fn is_qualified(&self, name: &str) -> bool {
        name == self.root_namespace
            || name
                .strip_prefix(&self.root_namespace)
                .is_some_and(|rest| rest.starts_with(NAMESPACE_SEPARATOR))
    }

    // ── Path derivation ───────────────────────────────────────────────────

    /// On-disk path of a qualified reference: the root namespace maps to the
    /// app dir, every further segment to a directory, plus the `.php`
    /// extension. Pure and total; equal input yields equal output.
    pub fn path_for(&self, class: &ClassRef) -> PathBuf {
        let qualified = class.as_str();
        let prefix = format!("{}{}", self.root_namespace, NAMESPACE_SEPARATOR);
        let relative = qualified.strip_prefix(&prefix).unwrap_or(qualified);

        let mut path = self.app_dir.clone();
        let mut segments = relative
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
            .peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.php"));
            }
        }
        path
    }

    /// Directory that holds generated repositories and the base files.
    pub fn repositories_dir(&self) -> PathBuf {
        let mut dir = self.app_dir.clone();
        for segment in self
            .repositories_segment
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
        {
            dir.push(segment);
        }
        dir
    }

    // ── Well-known references ─────────────────────────────────────────────

    /// The shared parent interface every generated interface extends.
    pub fn base_interface(&self) -> ClassRef {
        self.base_ref(BASE_INTERFACE_NAME)
    }

    /// The shared parent repository every generated repository extends by
    /// default.
    pub fn base_repository(&self) -> ClassRef {
        self.base_ref(BASE_REPOSITORY_NAME)
    }

    fn base_ref(&self, class_name: &str) -> ClassRef {
        ClassRef::new(format!(
            "{root}{sep}{repos}{sep}{class_name}",
            root = self.root_namespace,
            sep = NAMESPACE_SEPARATOR,
            repos = self.repositories_segment,
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// Project-relative path of the binding config file.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Project-relative path of the migrations directory.
    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }
}

/// Strip leading path delimiters and convert `/` to the namespace separator.
fn normalize(input: &str) -> String {
    input
        .trim()
        .trim_start_matches(['/', NAMESPACE_SEPARATOR])
        .replace('/', "\\")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── qualification ─────────────────────────────────────────────────────

    #[test]
    fn bare_name_gains_root_and_default_segment() {
        let layout = ProjectLayout::default();
        let r = layout.qualify_repository("UserRepository").unwrap();
        assert_eq!(r.as_str(), "App\\Repositories\\UserRepository");
    }

    #[test]
    fn slashes_are_accepted_as_delimiters() {
        let layout = ProjectLayout::default();
        let r = layout.qualify_repository("User/UserRepository").unwrap();
        assert_eq!(r.as_str(), "App\\Repositories\\User\\UserRepository");
    }

    #[test]
    fn leading_delimiters_are_stripped() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.qualify_repository("/UserRepository").unwrap(),
            layout.qualify_repository("\\UserRepository").unwrap(),
        );
    }

    #[test]
    fn qualification_is_idempotent() {
        let layout = ProjectLayout::default();
        let once = layout.qualify_repository("UserRepository").unwrap();
        let twice = layout.qualify_repository(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn already_qualified_input_is_only_normalized() {
        let layout = ProjectLayout::default();
        let r = layout
            .qualify_repository("App/Repositories/UserRepository")
            .unwrap();
        assert_eq!(r.as_str(), "App\\Repositories\\UserRepository");
    }

    #[test]
    fn root_prefix_match_is_per_segment_not_per_character() {
        // "Application\..." must not count as being under root "App".
        let layout = ProjectLayout::default();
        let r = layout
            .qualify_repository("Application\\UserRepository")
            .unwrap();
        assert_eq!(
            r.as_str(),
            "App\\Repositories\\Application\\UserRepository"
        );
    }

    #[test]
    fn models_qualify_under_the_model_namespace() {
        let layout = ProjectLayout::default();
        let r = layout.qualify_model("User").unwrap();
        assert_eq!(r.as_str(), "App\\Models\\User");
    }

    #[test]
    fn broken_root_namespace_fails_instead_of_looping() {
        // A root with a leading delimiter can never match its own prefix
        // after normalization, so qualification cannot converge.
        let layout = ProjectLayout::new(
            "\\App",
            "Repositories",
            "Models",
            "app",
            "config/repositories.php",
            "database/migrations",
        );
        let err = layout.qualify_repository("UserRepository").unwrap_err();
        assert!(matches!(err, DomainError::MalformedNamespace { .. }));
    }

    // ── path derivation ───────────────────────────────────────────────────

    #[test]
    fn path_maps_root_to_app_dir() {
        let layout = ProjectLayout::default();
        let r = ClassRef::new("App\\Repositories\\UserRepository");
        assert_eq!(
            layout.path_for(&r),
            PathBuf::from("app")
                .join("Repositories")
                .join("UserRepository.php"),
        );
    }

    #[test]
    fn path_for_is_deterministic() {
        let layout = ProjectLayout::default();
        let r = ClassRef::new("App\\Repositories\\User\\UserRepository");
        assert_eq!(layout.path_for(&r), layout.path_for(&r));
    }

    #[test]
    fn nested_namespaces_become_nested_directories() {
        let layout = ProjectLayout::default();
        let r = ClassRef::new("App\\Repositories\\User\\UserRepository");
        assert_eq!(
            layout.path_for(&r),
            PathBuf::from("app")
                .join("Repositories")
                .join("User")
                .join("UserRepository.php"),
        );
    }

    #[test]
    fn repositories_dir_sits_under_the_app_dir() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.repositories_dir(),
            PathBuf::from("app").join("Repositories"),
        );
    }

    // ── well-known references ─────────────────────────────────────────────

    #[test]
    fn base_refs_live_in_the_repository_namespace() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.base_interface().as_str(),
            "App\\Repositories\\RepositoryInterface"
        );
        assert_eq!(
            layout.base_repository().as_str(),
            "App\\Repositories\\BaseRepository"
        );
    }
}
