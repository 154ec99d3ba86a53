/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic records as a host extracts them from document markup.
//!
//! A record carries raw field strings. Splitting multi-valued fields and
//! deciding which fields feed which secondary index happens here, so every
//! host links attributes the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::kind::AttributeKind;

/// A value that could be either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Number(i64),
    Str(String),
}

impl fmt::Display for NumOrStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// One bibliography entry with its raw field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EntryRecord {
    /// Short name the entry is registered under.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<NumOrStr>,
    /// Separated by [`Config::tag_separator`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Separated by [`Config::name_separator`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Separated by [`Config::name_separator`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booktitle: Option<String>,
    /// Volume, number, issue and pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub within: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Short name of a related entry. Not indexed; the catalog checks that
    /// it names a registered entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossref: Option<String>,
}

impl EntryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The attribute values this record links, grouped by kind.
    ///
    /// Order is fixed: authors, editors, tags, publisher, institution,
    /// series, journal. Kinds with no usable value are left out.
    pub fn attribute_links(&self, config: &Config) -> Vec<(AttributeKind, Vec<String>)> {
        let values = |kind: AttributeKind, raw: &Option<String>| -> Vec<String> {
            let Some(raw) = raw.as_deref() else {
                return Vec::new();
            };
            if kind.is_multi_valued() {
                let separator = match kind {
                    AttributeKind::Tag => &config.tag_separator,
                    _ => &config.name_separator,
                };
                split_values(raw, separator)
            } else {
                let value = raw.trim();
                if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.to_string()]
                }
            }
        };

        let fields = [
            (AttributeKind::Author, &self.author),
            (AttributeKind::Author, &self.editor),
            (AttributeKind::Tag, &self.tags),
            (AttributeKind::Publisher, &self.publisher),
            (AttributeKind::Institution, &self.institution),
            (AttributeKind::Series, &self.series),
            (AttributeKind::Journal, &self.journal),
        ];

        fields
            .into_iter()
            .map(|(kind, raw)| (kind, values(kind, raw)))
            .filter(|(_, linked)| !linked.is_empty())
            .collect()
    }

    /// External link for the record's DOI.
    pub fn doi_url(&self, config: &Config) -> Option<String> {
        self.doi
            .as_deref()
            .map(str::trim)
            .filter(|doi| !doi.is_empty())
            .map(|doi| format!("{}{}", config.doi_resolver, doi))
    }
}

/// Split `raw` on `separator`, trimming each part and dropping blanks.
pub fn split_values(raw: &str, separator: &str) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_values_trims_and_drops_blanks() {
        assert_eq!(
            split_values(" networking, security ,, ", ","),
            vec!["networking".to_string(), "security".to_string()]
        );
        assert!(split_values("   ", ",").is_empty());
    }

    #[test]
    fn test_attribute_links_order_and_splitting() {
        let record = EntryRecord {
            tags: Some("networking, security".to_string()),
            author: Some("Smith, J. and Doe, A.".to_string()),
            editor: Some("Roe, R.".to_string()),
            journal: Some("Journal of Networks".to_string()),
            publisher: Some("  ".to_string()),
            ..EntryRecord::new("smith2020")
        };

        let links = record.attribute_links(&Config::default());
        assert_eq!(
            links,
            vec![
                (
                    AttributeKind::Author,
                    vec!["Smith, J.".to_string(), "Doe, A.".to_string()]
                ),
                (AttributeKind::Author, vec!["Roe, R.".to_string()]),
                (
                    AttributeKind::Tag,
                    vec!["networking".to_string(), "security".to_string()]
                ),
                (AttributeKind::Journal, vec!["Journal of Networks".to_string()]),
            ]
        );
    }

    #[test]
    fn test_single_valued_fields_are_not_split() {
        let record = EntryRecord {
            tags: Some("history, law".to_string()),
            publisher: Some(" Smith, Elder and Co. ".to_string()),
            series: Some("Law, Society and Policy".to_string()),
            ..EntryRecord::new("k")
        };
        let links = record.attribute_links(&Config::default());
        assert_eq!(
            links,
            vec![
                (
                    AttributeKind::Tag,
                    vec!["history".to_string(), "law".to_string()]
                ),
                (
                    AttributeKind::Publisher,
                    vec!["Smith, Elder and Co.".to_string()]
                ),
                (
                    AttributeKind::Series,
                    vec!["Law, Society and Policy".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = serde_yaml::from_str::<EntryRecord>("name: k\nauthr: Smith, J.\n").unwrap_err();
        assert!(err.to_string().contains("authr"));
    }

    #[test]
    fn test_custom_separators() {
        let config = Config {
            tag_separator: ";".to_string(),
            name_separator: "&".to_string(),
            ..Config::default()
        };
        let record = EntryRecord {
            tags: Some("a;b".to_string()),
            author: Some("X & Y".to_string()),
            ..EntryRecord::new("k")
        };
        let links = record.attribute_links(&config);
        assert_eq!(links[0].1, vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(links[1].1, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_doi_url() {
        let record = EntryRecord {
            doi: Some("10.1000/xyz123".to_string()),
            ..EntryRecord::new("k")
        };
        assert_eq!(
            record.doi_url(&Config::default()).as_deref(),
            Some("https://doi.org/10.1000/xyz123")
        );
        assert_eq!(EntryRecord::new("k").doi_url(&Config::default()), None);
    }

    #[test]
    fn test_year_accepts_number_or_string() {
        let record: EntryRecord = serde_yaml::from_str("name: k\nyear: 2020\n").unwrap();
        assert_eq!(record.year, Some(NumOrStr::Number(2020)));
        let record: EntryRecord = serde_yaml::from_str("name: k\nyear: forthcoming\n").unwrap();
        assert_eq!(record.year.map(|y| y.to_string()).as_deref(), Some("forthcoming"));
    }
}
