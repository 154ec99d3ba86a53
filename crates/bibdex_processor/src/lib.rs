/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibdex Processor
//!
//! This crate catalogs bibliographic entries discovered while processing a
//! document collection and builds alphabetical cross-reference indices over
//! them: by tag, author/editor, publisher, journal, institution and series.
//! It also resolves typed references ("this document is tagged X") to a
//! location on the matching index page.
//!
//! # Example
//!
//! ```rust
//! use bibdex_processor::{AttributeKind, Catalog, Resolution};
//!
//! let mut catalog = Catalog::default();
//! catalog.set_document("papers/networks");
//! let entry = catalog.register("smith2020");
//! catalog.link(&entry, AttributeKind::Author, ["Smith, J."]);
//! catalog.link(&entry, AttributeKind::Tag, ["networking", "security"]);
//!
//! let tags = catalog.build_index(AttributeKind::Tag);
//! let letters: Vec<&str> = tags.buckets.iter().map(|b| b.letter.as_str()).collect();
//! assert_eq!(letters, vec!["N", "S"]);
//!
//! let resolved = catalog.resolver().resolve(AttributeKind::Tag, "security").unwrap();
//! assert_eq!(
//!     resolved,
//!     Resolution::IndexPage {
//!         page_id: "bibtex-tag-index".to_string(),
//!         anchor: "cap-S".to_string(),
//!     }
//! );
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod io;
pub mod registry;
pub mod resolver;
pub mod store;

pub use catalog::{Catalog, RegistrationContext};
pub use error::{CatalogError, ResolveError};
pub use index::{build_index, GeneratedIndex, IndexBucket, IndexContent, IndexRow};
pub use io::{load_documents, SourceDocument};
pub use registry::EntryRegistry;
pub use resolver::{ReferenceRole, Resolution, Resolver};
pub use store::{AttributeIndex, SecondaryIndexStore};

// Re-export the data model for convenience
pub use bibdex_core::{AttributeKind, Config, Entry, EntryHandle, EntryRecord, Signature};
