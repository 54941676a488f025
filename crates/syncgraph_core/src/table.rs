//! Per-type metadata tables.

use crate::descriptor::SyncDescriptor;

/// Ordered mapping from published property name to [`SyncDescriptor`].
///
/// Insertion order defines encode output order. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTable {
    entries: Vec<(String, SyncDescriptor)>,
}

impl MetadataTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor under `name`.
    ///
    /// An existing entry with the same name is replaced in place and
    /// returned, keeping its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: SyncDescriptor,
    ) -> Option<SyncDescriptor> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, descriptor)),
            None => {
                self.entries.push((name, descriptor));
                None
            }
        }
    }

    /// Looks up a descriptor by published name.
    pub fn get(&self, name: &str) -> Option<&SyncDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut SyncDescriptor> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Resolves an encoded entry's `prop` to a descriptor.
    ///
    /// Encode emits property names, so a descriptor whose property name
    /// matches wins; otherwise the published name is used.
    pub fn resolve(&self, prop: &str) -> Option<&SyncDescriptor> {
        self.entries
            .iter()
            .map(|(_, d)| d)
            .find(|d| d.prop_name() == prop)
            .or_else(|| self.get(prop))
    }

    /// Iterates over `(published name, descriptor)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SyncDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Iterates over published names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SyncKind;

    #[test]
    fn preserves_insertion_order() {
        let mut table = MetadataTable::new();
        table.insert("numval", SyncDescriptor::new("numval", SyncKind::Primitive));
        table.insert("stringval", SyncDescriptor::new("_stringval", SyncKind::Primitive));
        table.insert("complexVal", SyncDescriptor::new("complexVal", SyncKind::TypeRef("Complex")));

        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["numval", "stringval", "complexVal"]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn replacing_keeps_position() {
        let mut table = MetadataTable::new();
        table.insert("a", SyncDescriptor::new("a", SyncKind::Primitive));
        table.insert("b", SyncDescriptor::new("b", SyncKind::Primitive));
        let old = table.insert("a", SyncDescriptor::new("a", SyncKind::TypeRef("X")));

        assert_eq!(old.map(|d| d.kind()), Some(SyncKind::Primitive));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.get("a").map(|d| d.kind()), Some(SyncKind::TypeRef("X")));
    }

    #[test]
    fn resolve_accepts_both_names() {
        let mut table = MetadataTable::new();
        table.insert("stringval", SyncDescriptor::new("_stringval", SyncKind::Primitive));

        assert!(table.resolve("stringval").is_some());
        assert_eq!(
            table.resolve("_stringval").map(|d| d.prop_name()),
            Some("_stringval")
        );
        assert!(table.resolve("val").is_none());
    }

    #[test]
    fn property_name_wins_over_published_name() {
        let mut table = MetadataTable::new();
        table.insert("a", SyncDescriptor::new("_a", SyncKind::Primitive));
        table.insert("_a", SyncDescriptor::new("b", SyncKind::Primitive));

        assert_eq!(table.resolve("_a").map(|d| d.prop_name()), Some("_a"));
        assert_eq!(table.resolve("b").map(|d| d.prop_name()), Some("b"));
        assert_eq!(table.resolve("a").map(|d| d.prop_name()), Some("_a"));
    }

    proptest::proptest! {
        #[test]
        fn order_follows_first_insertion(names in proptest::collection::vec("[a-e]", 0..20)) {
            let mut table = MetadataTable::new();
            let mut expected: Vec<String> = Vec::new();
            for name in &names {
                let descriptor = SyncDescriptor::new(name.as_str(), SyncKind::Primitive);
                table.insert(name.as_str(), descriptor);
                if !expected.contains(name) {
                    expected.push(name.clone());
                }
            }
            proptest::prop_assert_eq!(table.names().collect::<Vec<_>>(), expected);
        }
    }
}
