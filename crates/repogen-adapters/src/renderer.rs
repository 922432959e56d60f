//! Stub renderer: load the stub text, substitute the bound placeholders.

use repogen_core::{
    application::ports::{StubStore, TemplateRenderer},
    domain::{Bindings, TemplateKind, substitute},
    error::RepogenResult,
};
use tracing::instrument;

/// Renderer over any [`StubStore`].
///
/// Substitution is the domain's single-pass algorithm; this adapter only
/// supplies the stub text.
pub struct StubRenderer {
    store: Box<dyn StubStore>,
}

impl StubRenderer {
    pub fn new(store: Box<dyn StubStore>) -> Self {
        Self { store }
    }

    /// Renderer over the compiled-in stubs.
    pub fn builtin() -> Self {
        Self::new(Box::new(crate::stubs::BuiltinStubs::new()))
    }
}

impl TemplateRenderer for StubRenderer {
    #[instrument(skip_all, fields(template = %kind))]
    fn render(&self, kind: TemplateKind, bindings: &Bindings) -> RepogenResult<String> {
        let source = self.store.load(kind)?;
        Ok(substitute(&source, bindings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repogen_core::domain::Token;

    #[test]
    fn rendered_repository_has_no_leftover_placeholders() {
        let renderer = StubRenderer::builtin();
        let bindings = Bindings::new()
            .bind(Token::Namespace, "App\\Repositories")
            .bind(Token::ClassName, "UserRepository")
            .bind(Token::Interface, "UserRepositoryInterface")
            .bind(Token::Model, "App\\Models\\User")
            .bind(Token::Parent, "App\\Repositories\\BaseRepository");

        let out = renderer.render(TemplateKind::ItemRepository, &bindings).unwrap();

        assert!(!out.contains("Dummy"), "unreplaced placeholder in:\n{out}");
        assert!(out.contains("namespace App\\Repositories;"));
        assert!(out.contains(
            "class UserRepository extends \\App\\Repositories\\BaseRepository implements UserRepositoryInterface"
        ));
        assert!(out.contains("\\App\\Models\\User $model"));
    }

    #[test]
    fn rendered_interface_extends_the_base_contract() {
        let renderer = StubRenderer::builtin();
        let bindings = Bindings::new()
            .bind(Token::Namespace, "App\\Repositories")
            .bind(Token::ClassName, "UserRepositoryInterface")
            .bind(Token::Parent, "App\\Repositories\\RepositoryInterface");

        let out = renderer
            .render(TemplateKind::ItemRepositoryInterface, &bindings)
            .unwrap();

        assert!(out.contains(
            "interface UserRepositoryInterface extends \\App\\Repositories\\RepositoryInterface"
        ));
    }

    #[test]
    fn config_mapping_embeds_the_entry_list() {
        let renderer = StubRenderer::builtin();
        let bindings = Bindings::new().bind(
            Token::List,
            "    A\\I::class => A\\R::class,",
        );

        let out = renderer.render(TemplateKind::ConfigMapping, &bindings).unwrap();
        assert!(out.contains("return ["));
        assert!(out.contains("    A\\I::class => A\\R::class,"));
        assert!(out.trim_end().ends_with("];"));
    }
}
