/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::PathBuf;

use bibdex_core::{AttributeKind, EntryHandle, Signature};
use bibdex_processor::{Catalog, IndexContent};

// --- Helper Functions for Test Data Construction ---

/// Register `name` in `docname` and link each (kind, values) pair to it.
pub fn add_entry(
    catalog: &mut Catalog,
    docname: &str,
    name: &str,
    links: &[(AttributeKind, &[&str])],
) -> EntryHandle {
    catalog.set_document(docname);
    let handle = catalog.register(name);
    for (kind, values) in links {
        catalog.link(&handle, *kind, values.iter());
    }
    handle
}

/// A handle to a signature that was never registered.
pub fn ghost(name: &str) -> EntryHandle {
    EntryHandle::from(Signature::new("bibtex", name))
}

/// Bucket letters in output order.
pub fn letters(content: &IndexContent) -> Vec<&str> {
    content.buckets.iter().map(|b| b.letter.as_str()).collect()
}

/// (label, level) pairs of the bucket for `letter`.
pub fn rows(content: &IndexContent, letter: &str) -> Vec<(String, u8)> {
    content
        .bucket(letter)
        .map(|b| b.rows.iter().map(|r| (r.label.clone(), r.level)).collect())
        .unwrap_or_default()
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
