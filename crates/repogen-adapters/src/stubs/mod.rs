//! Stub storage: embedded defaults and published overrides.

mod builtin;

use std::path::PathBuf;

use repogen_core::{
    application::{ApplicationError, ports::StubStore},
    domain::TemplateKind,
    error::RepogenResult,
};
use tracing::debug;

/// The stub texts compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }
}

impl StubStore for BuiltinStubs {
    fn load(&self, kind: TemplateKind) -> RepogenResult<String> {
        Ok(builtin::stub_for(kind).to_string())
    }
}

/// Stub store that prefers published `<name>.stub` files from a directory,
/// falling back to the built-in texts for anything not published.
///
/// Mirrors the framework convention of letting a project override vendor
/// stubs one file at a time.
#[derive(Debug, Clone)]
pub struct DirStubs {
    dir: PathBuf,
    fallback: BuiltinStubs,
}

impl DirStubs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: BuiltinStubs::new(),
        }
    }
}

impl StubStore for DirStubs {
    fn load(&self, kind: TemplateKind) -> RepogenResult<String> {
        let path = self.dir.join(format!("{}.stub", kind.name()));
        if !path.exists() {
            return self.fallback.load(kind);
        }
        debug!(path = %path.display(), "Loading published stub override");
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::Io {
                path,
                reason: format!("Failed to read stub: {e}"),
            }
            .into()
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use repogen_core::domain::Token;

    #[test]
    fn every_builtin_stub_contains_exactly_its_declared_tokens() {
        for kind in TemplateKind::ALL {
            let stub = BuiltinStubs.load(kind).unwrap();
            for token in Token::ALL {
                let declared = kind.tokens().contains(&token);
                let present = stub.contains(token.placeholder());
                assert_eq!(
                    declared, present,
                    "{kind}: token {token:?} declared={declared} present={present}",
                );
            }
        }
    }

    #[test]
    fn builtin_stubs_are_php_sources() {
        for kind in TemplateKind::ALL {
            let stub = BuiltinStubs.load(kind).unwrap();
            assert!(stub.starts_with("<?php"), "{kind} missing the php opener");
        }
    }

    #[test]
    fn dir_stubs_fall_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStubs::new(dir.path());
        let from_dir = store.load(TemplateKind::ItemRepository).unwrap();
        let from_builtin = BuiltinStubs.load(TemplateKind::ItemRepository).unwrap();
        assert_eq!(from_dir, from_builtin);
    }

    #[test]
    fn dir_stubs_prefer_published_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("item-repository.stub"), "<?php // custom").unwrap();

        let store = DirStubs::new(dir.path());
        let stub = store.load(TemplateKind::ItemRepository).unwrap();
        assert_eq!(stub, "<?php // custom");

        // Other kinds still come from the built-ins.
        let other = store.load(TemplateKind::BaseRepository).unwrap();
        assert!(other.contains("BaseRepository"));
    }
}
