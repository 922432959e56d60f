//! Namespace-qualified class references.

use std::fmt;

use serde::Serialize;

/// Separator between namespace segments in generated PHP sources.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A namespace-qualified identifier for a generated type.
///
/// A `ClassRef` is normally produced by [`crate::domain::ProjectLayout::qualify_repository`]
/// or [`crate::domain::ProjectLayout::qualify_model`], which guarantee the
/// reference starts with the configured root namespace. The constructor itself
/// performs no checking; callers that bypass qualification assert the value is
/// already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassRef(String);

impl ClassRef {
    /// Wrap an already-qualified reference.
    pub fn new(qualified: impl Into<String>) -> Self {
        Self(qualified.into())
    }

    /// The full reference, e.g. `App\Repositories\UserRepository`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing identifier with the namespace stripped.
    ///
    /// For an unqualified reference (no separator) this is the whole string.
    pub fn short_name(&self) -> &str {
        self.0
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map_or(self.0.as_str(), |(_, short)| short)
    }

    /// Everything before the last separator, or `""` when there is none.
    pub fn namespace(&self) -> &str {
        self.0
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map_or("", |(ns, _)| ns)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
