/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use bibdex_core::EntryRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// The bibliographic records found in one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDocument {
    pub docname: String,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// Load documents from a file given its path.
///
/// Accepts YAML or JSON holding either a sequence of
/// `{ docname, entries }` documents or a mapping from docname to its
/// records. Mapping order is preserved.
pub fn load_documents(path: &Path) -> Result<Vec<SourceDocument>, CatalogError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => parse_json(&bytes),
        _ => parse_yaml(&String::from_utf8_lossy(&bytes)),
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Vec<SourceDocument>, CatalogError> {
    // Check for syntax errors first
    let _: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::ParseError("JSON".to_string(), e.to_string()))?;

    if let Ok(documents) = serde_json::from_slice::<Vec<SourceDocument>>(bytes) {
        return Ok(documents);
    }
    match serde_json::from_slice::<IndexMap<String, Vec<EntryRecord>>>(bytes) {
        Ok(map) => Ok(from_map(map)),
        Err(e) => Err(CatalogError::ParseError(
            "JSON".to_string(),
            e.to_string(),
        )),
    }
}

pub fn parse_yaml(content: &str) -> Result<Vec<SourceDocument>, CatalogError> {
    // Check for syntax errors first
    let _: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| CatalogError::ParseError("YAML".to_string(), e.to_string()))?;

    if let Ok(documents) = serde_yaml::from_str::<Vec<SourceDocument>>(content) {
        return Ok(documents);
    }
    match serde_yaml::from_str::<IndexMap<String, Vec<EntryRecord>>>(content) {
        Ok(map) => Ok(from_map(map)),
        Err(e) => Err(CatalogError::ParseError(
            "YAML".to_string(),
            e.to_string(),
        )),
    }
}

fn from_map(map: IndexMap<String, Vec<EntryRecord>>) -> Vec<SourceDocument> {
    map.into_iter()
        .map(|(docname, entries)| SourceDocument { docname, entries })
        .collect()
}
