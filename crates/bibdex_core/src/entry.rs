/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Registered bibliographic entries and their identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The namespace used when no configuration overrides it.
pub const DEFAULT_NAMESPACE: &str = "bibtex";

/// Priority assigned to every entry. Reserved for index merge rules.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Namespaced, globally unique identifier of an entry, e.g. `bibtex.smith2020`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Build the signature for `short_name` inside `namespace`.
    pub fn new(namespace: &str, short_name: &str) -> Self {
        Self(format!("{}.{}", namespace, short_name))
    }

    /// Wrap an already namespaced string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The signature with `namespace.` removed, if present.
    pub fn short_name<'a>(&'a self, namespace: &str) -> &'a str {
        self.0
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Signature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// In-page jump target for the entry named `short_name`, e.g. `bibtex-smith2020`.
pub fn anchor_for(namespace: &str, short_name: &str) -> String {
    format!("{}-{}", namespace, short_name)
}

/// One bibliographic record known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Entry {
    pub signature: Signature,
    /// The short name as the host supplied it.
    pub display_name: String,
    /// Identifier of the document that defined the entry.
    pub source_document: String,
    pub anchor: String,
    pub priority: i32,
}

impl Entry {
    pub fn new(namespace: &str, short_name: &str, source_document: &str) -> Self {
        Self {
            signature: Signature::new(namespace, short_name),
            display_name: short_name.to_string(),
            source_document: source_document.to_string(),
            anchor: anchor_for(namespace, short_name),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// The handle attribute links use to target this entry.
    pub fn handle(&self) -> EntryHandle {
        EntryHandle(self.signature.clone())
    }
}

/// Opaque reference to a registered entry.
///
/// Returned by registration and passed to every attribute link, so that a
/// link never depends on which entry happened to be registered last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryHandle(Signature);

impl EntryHandle {
    pub fn signature(&self) -> &Signature {
        &self.0
    }
}

impl From<Signature> for EntryHandle {
    fn from(signature: Signature) -> Self {
        Self(signature)
    }
}
