/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibdex_core::{AttributeKind, ConfigError};
use thiserror::Error;

/// Errors raised while loading input for a catalog build.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A reference that could not be turned into a location.
///
/// None of these abort a build; the host renders the reference as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no {kind} named {target:?}")]
    UnknownTarget { kind: AttributeKind, target: String },

    #[error("no entry named {0:?}")]
    UnknownEntry(String),

    #[error("unknown reference role: {0}")]
    UnknownRole(String),
}
