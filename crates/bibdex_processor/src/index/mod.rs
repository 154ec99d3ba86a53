/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Index page content.
//!
//! An index page lists every value of one attribute kind, grouped into
//! buckets by leading letter. Each value gets a heading row followed by one
//! row per entry carrying it.

pub mod builder;

pub use builder::build_index;

use bibdex_core::{Entry, IndexPage};
use serde::Serialize;

/// Nesting level of a heading row.
pub const HEADING_LEVEL: u8 = 1;
/// Nesting level of an entry row.
pub const ENTRY_LEVEL: u8 = 2;

/// Prefix of the anchor every bucket is rendered under.
pub const BUCKET_ANCHOR_PREFIX: &str = "cap-";

/// One row of an index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IndexRow {
    pub label: String,
    pub level: u8,
    /// Empty for headings.
    pub source_document: String,
    /// Empty for headings.
    pub anchor: String,
    pub extra: String,
    pub qualifier: String,
    pub description: String,
}

impl IndexRow {
    pub fn heading(value: &str) -> Self {
        Self {
            label: value.to_string(),
            level: HEADING_LEVEL,
            source_document: String::new(),
            anchor: String::new(),
            extra: String::new(),
            qualifier: String::new(),
            description: String::new(),
        }
    }

    pub fn entry(entry: &Entry, namespace: &str) -> Self {
        Self {
            label: entry.signature.short_name(namespace).to_string(),
            level: ENTRY_LEVEL,
            source_document: entry.source_document.clone(),
            anchor: entry.anchor.clone(),
            extra: String::new(),
            qualifier: String::new(),
            description: String::new(),
        }
    }

    pub fn is_heading(&self) -> bool {
        self.level == HEADING_LEVEL
    }
}

/// Rows sharing one leading letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexBucket {
    pub letter: String,
    pub rows: Vec<IndexRow>,
}

impl IndexBucket {
    /// The anchor this bucket renders under, e.g. `cap-N`.
    pub fn anchor(&self) -> String {
        format!("{}{}", BUCKET_ANCHOR_PREFIX, self.letter)
    }
}

/// Generated content of one index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexContent {
    pub buckets: Vec<IndexBucket>,
    /// Whether groups render collapsed by default.
    pub collapse: bool,
}

impl IndexContent {
    pub fn bucket(&self, letter: &str) -> Option<&IndexBucket> {
        self.buckets.iter().find(|b| b.letter == letter)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// An index page together with its generated content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratedIndex {
    pub page: IndexPage,
    pub page_id: String,
    pub content: IndexContent,
}

/// The bucket key for `value`: its first character, upper-cased.
///
/// `None` for the empty string.
pub fn bucket_letter(value: &str) -> Option<String> {
    value.chars().next().map(|c| c.to_uppercase().collect())
}

/// The in-page anchor of the bucket `value` falls into.
pub fn bucket_anchor(value: &str) -> Option<String> {
    bucket_letter(value).map(|letter| format!("{}{}", BUCKET_ANCHOR_PREFIX, letter))
}
