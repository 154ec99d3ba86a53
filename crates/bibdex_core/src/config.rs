/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::entry::DEFAULT_NAMESPACE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Build-wide settings for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Prefix for entry signatures, anchors and index page ids.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Separator between tags in a record's `tags` field.
    #[serde(default = "default_tag_separator")]
    pub tag_separator: String,

    /// Separator between names in `author` and `editor` fields.
    #[serde(default = "default_name_separator")]
    pub name_separator: String,

    /// Base URL that DOIs are appended to.
    #[serde(default = "default_doi_resolver")]
    pub doi_resolver: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            tag_separator: default_tag_separator(),
            name_separator: default_name_separator(),
            doi_resolver: default_doi_resolver(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_tag_separator() -> String {
    ",".to_string()
}

fn default_name_separator() -> String {
    " and ".to_string()
}

fn default_doi_resolver() -> String {
    "https://doi.org/".to_string()
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Rejects an empty namespace or separator.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::Invalid("namespace must not be empty".into()));
        }
        if self.tag_separator.is_empty() || self.name_separator.is_empty() {
            return Err(ConfigError::Invalid("separators must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.namespace, "bibtex");
        assert_eq!(config.name_separator, " and ");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
namespace = "bib"
tag-separator = ";"
"#,
        )
        .unwrap();
        assert_eq!(config.namespace, "bib");
        assert_eq!(config.tag_separator, ";");
        assert_eq!(config.doi_resolver, "https://doi.org/");
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = Config::from_toml_str("tag_separator = \";\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("tag_separator"));
    }

    #[test]
    fn test_rejects_empty_separator() {
        let err = Config::from_toml_str("tag-separator = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
