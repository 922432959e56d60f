//! The persisted interface→repository binding table.

use indexmap::IndexMap;

use crate::domain::class_ref::ClassRef;

/// Insertion-ordered mapping from interface to repository implementation.
///
/// The host framework reads the serialized form at boot to register one
/// container binding per entry. The map is loaded once per invocation,
/// mutated by at most one upsert, and rewritten whole; there is no partial
/// edit of the backing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingMap {
    entries: IndexMap<ClassRef, ClassRef>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, interface: &ClassRef) -> Option<&ClassRef> {
        self.entries.get(interface)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassRef, &ClassRef)> {
        self.entries.iter()
    }

    /// Insert or overwrite one pair.
    ///
    /// An empty interface or repository makes this a no-op rather than an
    /// error; an invocation that created nothing has nothing to record.
    pub fn upsert(&mut self, interface: ClassRef, repository: ClassRef) {
        if interface.is_empty() || repository.is_empty() {
            return;
        }
        self.entries.insert(interface, repository);
    }

    /// Parse a persisted mapping file.
    ///
    /// Only lines of the shape `X::class => Y::class,` count as entries;
    /// template boilerplate (`<?php`, the doc header, `return [`, `];`) is
    /// skipped. A leading `\` on either side is tolerated and dropped.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            let line = line.trim().trim_end_matches(',');
            let Some((lhs, rhs)) = line.split_once("=>") else {
                continue;
            };
            let (Some(interface), Some(repository)) = (class_entry(lhs), class_entry(rhs))
            else {
                continue;
            };
            map.upsert(ClassRef::new(interface), ClassRef::new(repository));
        }
        map
    }

    /// One formatted config line per entry, in insertion order.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(interface, repository)| {
                format!("    {interface}::class => {repository}::class,")
            })
            .collect()
    }
}

/// Extract the class reference from one side of a `=>` pair.
fn class_entry(raw: &str) -> Option<&str> {
    let name = raw
        .trim()
        .strip_suffix("::class")?
        .trim_start_matches('\\');
    (!name.is_empty()).then_some(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn r(s: &str) -> ClassRef {
        ClassRef::new(s)
    }

    #[test]
    fn upsert_inserts_and_overwrites() {
        let mut map = BindingMap::new();
        map.upsert(r("A\\I"), r("A\\R1"));
        map.upsert(r("A\\I"), r("A\\R2"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&r("A\\I")), Some(&r("A\\R2")));
    }

    #[test]
    fn upsert_with_empty_interface_is_a_noop() {
        let mut map = BindingMap::new();
        map.upsert(r("A\\I"), r("A\\R"));
        let before = map.clone();
        map.upsert(r(""), r("A\\Other"));
        assert_eq!(map, before);
    }

    #[test]
    fn upsert_with_empty_repository_is_a_noop() {
        let mut map = BindingMap::new();
        map.upsert(r("A\\I"), r("A\\R"));
        let before = map.clone();
        map.upsert(r("A\\Other"), r(""));
        assert_eq!(map, before);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = BindingMap::new();
        map.upsert(r("A\\Zed"), r("A\\Z"));
        map.upsert(r("A\\Alpha"), r("A\\A"));
        let keys: Vec<_> = map.iter().map(|(i, _)| i.as_str()).collect();
        assert_eq!(keys, ["A\\Zed", "A\\Alpha"]);
    }

    #[test]
    fn parse_reads_entry_lines_and_skips_boilerplate() {
        let text = "<?php\n\nreturn [\n    App\\Repositories\\UserRepositoryInterface::class => App\\Repositories\\UserRepository::class,\n];\n";
        let map = BindingMap::parse(text);
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get(&r("App\\Repositories\\UserRepositoryInterface")),
            Some(&r("App\\Repositories\\UserRepository")),
        );
    }

    #[test]
    fn parse_drops_leading_backslashes() {
        let map = BindingMap::parse("\\A\\I::class => \\A\\R::class,");
        assert_eq!(map.get(&r("A\\I")), Some(&r("A\\R")));
    }

    #[test]
    fn parse_ignores_malformed_lines() {
        let map = BindingMap::parse("A\\I => A\\R,\nwhatever\nA\\I::class =>,\n");
        assert!(map.is_empty());
    }

    #[test]
    fn lines_round_trip_through_parse() {
        let mut map = BindingMap::new();
        map.upsert(r("App\\Repositories\\BInterface"), r("App\\Repositories\\B"));
        map.upsert(r("App\\Repositories\\AInterface"), r("App\\Repositories\\A"));

        let rendered = format!("return [\n{}\n];", map.to_lines().join("\n"));
        let reparsed = BindingMap::parse(&rendered);

        assert_eq!(reparsed, map);
        let order: Vec<_> = reparsed.iter().map(|(i, _)| i.as_str()).collect();
        assert_eq!(
            order,
            ["App\\Repositories\\BInterface", "App\\Repositories\\AInterface"],
        );
    }
}
