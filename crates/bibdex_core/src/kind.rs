/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Attribute kinds and their index pages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The attributes a bibliographic entry can be indexed by.
///
/// Each kind owns exactly one secondary index and one index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeKind {
    Tag,
    /// Authors and editors share one index.
    Author,
    Publisher,
    Journal,
    Institution,
    Series,
}

impl AttributeKind {
    pub const COUNT: usize = 6;

    /// All kinds, in index page order.
    pub const ALL: [AttributeKind; Self::COUNT] = [
        AttributeKind::Tag,
        AttributeKind::Author,
        AttributeKind::Publisher,
        AttributeKind::Journal,
        AttributeKind::Institution,
        AttributeKind::Series,
    ];

    /// Position of this kind in [`AttributeKind::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Self::Tag => 0,
            Self::Author => 1,
            Self::Publisher => 2,
            Self::Journal => 3,
            Self::Institution => 4,
            Self::Series => 5,
        }
    }

    /// The role name used to reference this kind from document text.
    pub fn role_name(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Author => "author",
            Self::Publisher => "publisher",
            Self::Journal => "journal",
            Self::Institution => "institution",
            Self::Series => "series",
        }
    }

    /// The plural key this kind's data is stored under.
    pub fn data_key(self) -> &'static str {
        match self {
            Self::Tag => "tags",
            Self::Author => "authors",
            Self::Publisher => "publishers",
            Self::Journal => "journals",
            Self::Institution => "institutions",
            Self::Series => "series",
        }
    }

    /// Whether a single attribute directive may carry several values.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Tag | Self::Author)
    }

    /// The fixed index page for this kind.
    pub fn page(self) -> IndexPage {
        let (name, title, shortname) = match self {
            Self::Tag => ("tag-index", "Tag Index", "tagindex"),
            Self::Author => ("author-index", "Author/Editor Index", "authorindex"),
            Self::Publisher => ("publisher-index", "Publisher Index", "pubindex"),
            Self::Journal => ("journal-index", "Journal Index", "jourindex"),
            Self::Institution => ("institution-index", "Institution Index", "instindex"),
            Self::Series => ("series-index", "Series Index", "seriesindex"),
        };
        IndexPage {
            kind: self,
            name,
            title,
            shortname,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for AttributeKind {
    type Err = ParseKindError;

    /// Accepts the role name, the data key, or the index page shortname.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKind::ALL
            .into_iter()
            .find(|kind| {
                s == kind.role_name() || s == kind.data_key() || s == kind.page().shortname
            })
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Static description of the index page generated for one attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub kind: AttributeKind,
    /// Page name, unique within the domain.
    pub name: &'static str,
    /// Human-readable page title.
    pub title: &'static str,
    /// Short alias used by hosts when linking to the page.
    pub shortname: &'static str,
}

impl IndexPage {
    /// The page identifier inside `namespace`, e.g. `bibtex-tag-index`.
    pub fn page_id(&self, namespace: &str) -> String {
        format!("{}-{}", namespace, self.name)
    }
}
