/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Attribute-to-entry mappings, one per [`AttributeKind`].
//!
//! Indices hold signatures only. A signature may outlive its entry or never
//! have had one; readers filter against the registry.

use bibdex_core::{AttributeKind, Signature};
use indexmap::IndexMap;

/// Maps attribute values to the signatures of the entries carrying them.
///
/// Values are opaque, case-sensitive keys. Signatures are kept in link
/// order and duplicates are not collapsed.
#[derive(Debug, Clone, Default)]
pub struct AttributeIndex {
    values: IndexMap<String, Vec<Signature>>,
}

impl AttributeIndex {
    pub fn append(&mut self, value: &str, signature: Signature) {
        self.values
            .entry(value.to_string())
            .or_default()
            .push(signature);
    }

    /// Signatures linked to `value`, in link order.
    pub fn entries_for(&self, value: &str) -> &[Signature] {
        self.values.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains_key(value)
    }

    /// All (value, signatures) pairs in first-link order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Signature])> {
        self.values.iter().map(|(v, sigs)| (v.as_str(), sigs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The six secondary indices, addressed by kind.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndexStore {
    indices: [AttributeIndex; AttributeKind::COUNT],
}

impl SecondaryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self, kind: AttributeKind) -> &AttributeIndex {
        &self.indices[kind.ordinal()]
    }

    /// Append `signature` under each of `values`, preserving call order.
    pub fn link<I, S>(&mut self, kind: AttributeKind, signature: &Signature, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = &mut self.indices[kind.ordinal()];
        for value in values {
            index.append(value.as_ref(), signature.clone());
        }
    }

    pub fn entries_for(&self, kind: AttributeKind, value: &str) -> &[Signature] {
        self.index(kind).entries_for(value)
    }

    /// True when no index holds any value.
    pub fn is_empty(&self) -> bool {
        self.indices.iter().all(AttributeIndex::is_empty)
    }

    pub fn clear(&mut self) {
        self.indices = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(name: &str) -> Signature {
        Signature::new("bibtex", name)
    }

    #[test]
    fn test_link_preserves_order_and_duplicates() {
        let mut store = SecondaryIndexStore::new();
        store.link(AttributeKind::Tag, &sig("b"), ["x"]);
        store.link(AttributeKind::Tag, &sig("a"), ["x"]);
        store.link(AttributeKind::Tag, &sig("a"), ["x"]);

        assert_eq!(
            store.entries_for(AttributeKind::Tag, "x"),
            &[sig("b"), sig("a"), sig("a")]
        );
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut store = SecondaryIndexStore::new();
        store.link(AttributeKind::Publisher, &sig("a"), ["MIT Press"]);

        assert_eq!(store.entries_for(AttributeKind::Publisher, "MIT Press").len(), 1);
        assert!(store.entries_for(AttributeKind::Series, "MIT Press").is_empty());
        assert!(store.index(AttributeKind::Tag).is_empty());
    }

    #[test]
    fn test_values_are_case_sensitive() {
        let mut store = SecondaryIndexStore::new();
        store.link(AttributeKind::Tag, &sig("a"), ["Rust"]);

        assert!(store.index(AttributeKind::Tag).contains("Rust"));
        assert!(!store.index(AttributeKind::Tag).contains("rust"));
        assert!(store.entries_for(AttributeKind::Tag, "rust").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = SecondaryIndexStore::new();
        store.link(AttributeKind::Author, &sig("a"), vec!["Smith, J.".to_string()]);
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }
}
