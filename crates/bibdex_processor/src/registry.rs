/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The canonical set of entries, keyed by signature.

use bibdex_core::{Entry, Signature};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct EntryRegistry {
    entries: IndexMap<Signature, Entry>,
}

impl EntryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, replacing any entry with the same signature.
    ///
    /// Returns the replaced entry. A replaced entry keeps its original
    /// position in enumeration order.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.signature.clone(), entry)
    }

    pub fn lookup(&self, signature: &str) -> Option<&Entry> {
        self.entries.get(signature)
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.entries.contains_key(signature)
    }

    /// Entries in first-registration order.
    pub fn all_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = EntryRegistry::new();
        assert!(registry
            .insert(Entry::new("bibtex", "smith2020", "doc1"))
            .is_none());

        let entry = registry.lookup("bibtex.smith2020").unwrap();
        assert_eq!(entry.source_document, "doc1");
        assert!(registry.lookup("bibtex.doe2019").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = EntryRegistry::new();
        registry.insert(Entry::new("bibtex", "a", "doc1"));
        registry.insert(Entry::new("bibtex", "b", "doc1"));
        let replaced = registry.insert(Entry::new("bibtex", "a", "doc2"));

        assert_eq!(replaced.map(|e| e.source_document), Some("doc1".to_string()));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("bibtex.a").unwrap().source_document, "doc2");

        let order: Vec<&str> = registry.all_entries().map(|e| e.display_name.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }
}
