/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Cross-reference resolution.
//!
//! A reference found in document text names a role and a target. Attribute
//! roles resolve to the letter bucket of the matching index page, `ref`
//! resolves to the defining entry, and `doi` resolves to an external link.
//! Failures are reported as [`ResolveError`] and never abort a build.

use std::fmt;
use std::str::FromStr;

use bibdex_core::{AttributeKind, Signature};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::index::bucket_anchor;

/// The role a reference is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceRole {
    Attribute(AttributeKind),
    /// Direct reference to an entry by short name or signature.
    Entry,
    Doi,
}

impl FromStr for ReferenceRole {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ref" => Ok(Self::Entry),
            "doi" => Ok(Self::Doi),
            _ => AttributeKind::ALL
                .into_iter()
                .find(|kind| kind.role_name() == s)
                .map(Self::Attribute)
                .ok_or_else(|| ResolveError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(kind) => write!(f, "{}", kind),
            Self::Entry => f.write_str("ref"),
            Self::Doi => f.write_str("doi"),
        }
    }
}

/// Where a resolved reference points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Resolution {
    /// A letter bucket on an index page.
    IndexPage { page_id: String, anchor: String },
    /// The entry definition inside its source document.
    Entry { docname: String, anchor: String },
    External { uri: String },
}

/// Resolves references against a finished catalog.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve an attribute reference to its bucket on the kind's index page.
    pub fn resolve(&self, kind: AttributeKind, target: &str) -> Result<Resolution, ResolveError> {
        let unknown = || ResolveError::UnknownTarget {
            kind,
            target: target.to_string(),
        };

        if !self.catalog.store().index(kind).contains(target) {
            debug!(%kind, target, "unresolved attribute reference");
            return Err(unknown());
        }
        let anchor = bucket_anchor(target).ok_or_else(unknown)?;

        Ok(Resolution::IndexPage {
            page_id: kind.page().page_id(self.catalog.namespace()),
            anchor,
        })
    }

    /// Resolve a reference to an entry, given its short name or signature.
    pub fn resolve_entry(&self, target: &str) -> Result<Resolution, ResolveError> {
        let namespace = self.catalog.namespace();
        let entry = self
            .catalog
            .lookup(Signature::new(namespace, target).as_str())
            .or_else(|| self.catalog.lookup(target))
            .ok_or_else(|| {
                debug!(target, "unresolved entry reference");
                ResolveError::UnknownEntry(target.to_string())
            })?;

        Ok(Resolution::Entry {
            docname: entry.source_document.clone(),
            anchor: entry.anchor.clone(),
        })
    }

    pub fn resolve_doi(&self, doi: &str) -> Resolution {
        Resolution::External {
            uri: format!("{}{}", self.catalog.config().doi_resolver, doi.trim()),
        }
    }

    /// Resolve a reference written as `role` with `target`.
    ///
    /// Targets are matched exactly. Hosts whose markup lower-cases role
    /// targets must do so themselves before calling.
    pub fn resolve_role(&self, role: &str, target: &str) -> Result<Resolution, ResolveError> {
        let role = role.parse::<ReferenceRole>().map_err(|e| {
            warn!(role, target, "unknown reference role");
            e
        })?;
        match role {
            ReferenceRole::Attribute(kind) => self.resolve(kind, target),
            ReferenceRole::Entry => self.resolve_entry(target),
            ReferenceRole::Doi => Ok(self.resolve_doi(target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.set_document("papers/a");
        catalog.register("smith2020");
        catalog.link_tags(["networking"]);
        catalog.link_series("Lecture Notes");
        catalog
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ref".parse::<ReferenceRole>(), Ok(ReferenceRole::Entry));
        assert_eq!("doi".parse::<ReferenceRole>(), Ok(ReferenceRole::Doi));
        assert_eq!(
            "journal".parse::<ReferenceRole>(),
            Ok(ReferenceRole::Attribute(AttributeKind::Journal))
        );
        assert_eq!(
            "tags".parse::<ReferenceRole>(),
            Err(ResolveError::UnknownRole("tags".to_string()))
        );
        assert_eq!(ReferenceRole::Attribute(AttributeKind::Tag).to_string(), "tag");
    }

    #[test]
    fn test_resolve_attribute() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolver().resolve(AttributeKind::Series, "Lecture Notes"),
            Ok(Resolution::IndexPage {
                page_id: "bibtex-series-index".to_string(),
                anchor: "cap-L".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_is_kind_specific() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolver().resolve(AttributeKind::Journal, "networking"),
            Err(ResolveError::UnknownTarget {
                kind: AttributeKind::Journal,
                target: "networking".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_entry_by_short_name_or_signature() {
        let catalog = catalog();
        let expected = Ok(Resolution::Entry {
            docname: "papers/a".to_string(),
            anchor: "bibtex-smith2020".to_string(),
        });
        assert_eq!(catalog.resolver().resolve_entry("smith2020"), expected);
        assert_eq!(catalog.resolver().resolve_entry("bibtex.smith2020"), expected);
        assert_eq!(
            catalog.resolver().resolve_entry("doe2019"),
            Err(ResolveError::UnknownEntry("doe2019".to_string()))
        );
    }

    #[test]
    fn test_resolve_role_dispatch() {
        let catalog = catalog();
        let resolver = catalog.resolver();
        assert_eq!(
            resolver.resolve_role("doi", "10.1000/182"),
            Ok(Resolution::External {
                uri: "https://doi.org/10.1000/182".to_string()
            })
        );
        assert!(resolver.resolve_role("tag", "networking").is_ok());
        assert_eq!(
            resolver.resolve_role("keyword", "networking"),
            Err(ResolveError::UnknownRole("keyword".to_string()))
        );
    }

    #[test]
    fn test_resolve_role_targets_match_exactly() {
        let catalog = catalog();
        let resolver = catalog.resolver();
        assert_eq!(
            resolver.resolve_role("tag", "Networking"),
            Err(ResolveError::UnknownTarget {
                kind: AttributeKind::Tag,
                target: "Networking".to_string(),
            })
        );
        assert!(resolver.resolve_role("series", "Lecture Notes").is_ok());
        assert!(resolver.resolve_role("series", "lecture notes").is_err());
        assert!(resolver.resolve_role("ref", "Smith2020").is_err());
    }
}
