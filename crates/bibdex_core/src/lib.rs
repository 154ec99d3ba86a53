/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Data model for the bibdex bibliography catalog.
//!
//! These types are shared between the indexing engine in `bibdex_processor`
//! and the hosts that feed it: entries and their signatures, the attribute
//! kinds entries are indexed by, raw entry records, and build configuration.

pub mod config;
pub mod entry;
pub mod kind;
pub mod record;

pub use config::{Config, ConfigError};
pub use entry::{anchor_for, Entry, EntryHandle, Signature, DEFAULT_NAMESPACE, DEFAULT_PRIORITY};
pub use kind::{AttributeKind, IndexPage, ParseKindError};
pub use record::{split_values, EntryRecord, NumOrStr};
