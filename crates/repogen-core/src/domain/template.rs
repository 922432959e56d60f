//! Stub templates: kinds, placeholder tokens, bindings, and substitution.
//!
//! Placeholders form a closed set per stub. Modelling them as an enum instead
//! of free-form string keys means an unknown-placeholder typo is a compile
//! error at the call site, not a silently unreplaced token in generated code.

use std::fmt;

/// A placeholder token a stub may contain.
///
/// The spelling follows the `Dummy*` convention of the stub texts themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `DummyNamespace`: namespace of the generated type.
    Namespace,
    /// `DummyClass`: short name of the generated type.
    ClassName,
    /// `DummyInterface`: short name of the interface a repository implements.
    Interface,
    /// `DummyModel`: fully-qualified model reference.
    Model,
    /// `DummyParent`: fully-qualified parent class or interface.
    Parent,
    /// `DummyList`: formatted binding lines of the config mapping.
    List,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::Namespace,
        Token::ClassName,
        Token::Interface,
        Token::Model,
        Token::Parent,
        Token::List,
    ];

    /// The literal text this token appears as inside stub sources.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Namespace => "DummyNamespace",
            Self::ClassName => "DummyClass",
            Self::Interface => "DummyInterface",
            Self::Model => "DummyModel",
            Self::Parent => "DummyParent",
            Self::List => "DummyList",
        }
    }
}

/// The named stub resources repogen ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    BaseRepository,
    BaseInterface,
    ItemRepository,
    ItemRepositoryInterface,
    ConfigMapping,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::BaseRepository,
        TemplateKind::BaseInterface,
        TemplateKind::ItemRepository,
        TemplateKind::ItemRepositoryInterface,
        TemplateKind::ConfigMapping,
    ];

    /// Resource name, also the file stem of a published override stub.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BaseRepository => "base-repository",
            Self::BaseInterface => "base-interface",
            Self::ItemRepository => "item-repository",
            Self::ItemRepositoryInterface => "item-repository-interface",
            Self::ConfigMapping => "config-mapping",
        }
    }

    /// The exact placeholder set this stub is allowed to contain.
    pub const fn tokens(self) -> &'static [Token] {
        match self {
            Self::BaseRepository | Self::BaseInterface => &[Token::Namespace],
            Self::ItemRepository => &[
                Token::Namespace,
                Token::ClassName,
                Token::Interface,
                Token::Model,
                Token::Parent,
            ],
            Self::ItemRepositoryInterface => {
                &[Token::Namespace, Token::ClassName, Token::Parent]
            }
            Self::ConfigMapping => &[Token::List],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token → value bindings for one render.
///
/// Offering a binding a stub does not use is fine; the extra token is simply
/// never looked up. Binding the same token twice keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(Token, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, token: Token, value: impl Into<String>) -> Self {
        self.entries.retain(|(t, _)| *t != token);
        self.entries.push((token, value.into()));
        self
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn patterns(&self) -> Vec<(&'static str, &str)> {
        let mut patterns: Vec<_> = self
            .entries
            .iter()
            .map(|(t, v)| (t.placeholder(), v.as_str()))
            .collect();
        // Longest placeholder first, so a token that is a prefix of another
        // can never shadow the longer one.
        patterns.sort_by_key(|(p, _)| std::cmp::Reverse(p.len()));
        patterns
    }
}

/// Replace every bound token in `source` in a single left-to-right pass.
///
/// Bound values are emitted verbatim and never rescanned: a value that itself
/// contains placeholder text cannot trigger a second substitution, which a
/// sequential find-and-replace per token would. Placeholders with no binding
/// are left untouched.
pub fn substitute(source: &str, bindings: &Bindings) -> String {
    let patterns = bindings.patterns();
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    'scan: while let Some(ch) = rest.chars().next() {
        for (pattern, value) in &patterns {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_tokens_are_replaced() {
        let bindings = Bindings::new()
            .bind(Token::Namespace, "App\\Repositories")
            .bind(Token::ClassName, "UserRepository");
        let out = substitute("namespace DummyNamespace; class DummyClass {}", &bindings);
        assert_eq!(
            out,
            "namespace App\\Repositories; class UserRepository {}"
        );
    }

    #[test]
    fn unbound_tokens_are_left_unchanged() {
        let bindings = Bindings::new().bind(Token::ClassName, "UserRepository");
        let out = substitute("class DummyClass extends DummyParent {}", &bindings);
        assert_eq!(out, "class UserRepository extends DummyParent {}");
    }

    #[test]
    fn empty_bindings_are_the_identity() {
        let source = "class DummyClass extends DummyParent {}";
        assert_eq!(substitute(source, &Bindings::new()), source);
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        // A bound value containing placeholder text must come through
        // verbatim; sequential single-token replacement would corrupt it.
        let bindings = Bindings::new()
            .bind(Token::Namespace, "Holds DummyClass inside")
            .bind(Token::ClassName, "Real");
        let out = substitute("ns DummyNamespace; class DummyClass", &bindings);
        assert_eq!(out, "ns Holds DummyClass inside; class Real");
    }

    #[test]
    fn rebinding_a_token_keeps_the_last_value() {
        let bindings = Bindings::new()
            .bind(Token::ClassName, "First")
            .bind(Token::ClassName, "Second");
        assert_eq!(bindings.get(Token::ClassName), Some("Second"));
    }

    #[test]
    fn substitution_is_deterministic() {
        let bindings = Bindings::new().bind(Token::Model, "App\\Models\\User");
        let source = "use DummyModel;";
        assert_eq!(substitute(source, &bindings), substitute(source, &bindings));
    }

    #[test]
    fn every_kind_declares_a_nonempty_token_set() {
        for kind in TemplateKind::ALL {
            assert!(!kind.tokens().is_empty(), "no tokens for {kind}");
        }
    }

    #[test]
    fn list_token_belongs_only_to_the_config_mapping() {
        for kind in TemplateKind::ALL {
            let has_list = kind.tokens().contains(&Token::List);
            assert_eq!(has_list, kind == TemplateKind::ConfigMapping);
        }
    }

    #[test]
    fn kind_names_are_kebab_case_resources() {
        assert_eq!(TemplateKind::ItemRepositoryInterface.name(), "item-repository-interface");
        assert_eq!(TemplateKind::ConfigMapping.to_string(), "config-mapping");
    }
}
