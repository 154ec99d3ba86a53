/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bibliography catalog.
//!
//! ## Build model
//!
//! A host walks its documents in order. For each document it sets the
//! current document, then registers each bibliographic record and links the
//! record's attributes. Once every document is processed the host generates
//! index pages and resolves references found while rendering.
//!
//! Links are addressed through the [`EntryHandle`] returned by
//! [`Catalog::register`]. The `link_<kind>` methods instead attach to the
//! most recently registered entry; before any registration they do nothing.

use bibdex_core::{AttributeKind, Config, Entry, EntryHandle, EntryRecord, IndexPage, Signature};
use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::index::{self, GeneratedIndex, IndexContent};
use crate::io::SourceDocument;
use crate::registry::EntryRegistry;
use crate::resolver::Resolver;
use crate::store::SecondaryIndexStore;

/// The entry that ambient link calls attach to.
#[derive(Debug, Clone, Default)]
pub struct RegistrationContext {
    last: Option<Signature>,
}

impl RegistrationContext {
    pub fn current(&self) -> Option<&Signature> {
        self.last.as_ref()
    }

    fn set(&mut self, signature: Signature) {
        self.last = Some(signature);
    }

    fn reset(&mut self) {
        self.last = None;
    }
}

/// Registry, secondary indices and registration context for one build.
///
/// Single writer: registration and linking take `&mut self`. Hosts that
/// process documents concurrently keep one handle per entry and serialize
/// access to the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: Config,
    registry: EntryRegistry,
    store: SecondaryIndexStore,
    context: RegistrationContext,
    current_document: String,
    redefinitions: Vec<Signature>,
    crossrefs: Vec<(Signature, String)>,
}

impl Catalog {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn registry(&self) -> &EntryRegistry {
        &self.registry
    }

    pub fn store(&self) -> &SecondaryIndexStore {
        &self.store
    }

    pub fn context(&self) -> &RegistrationContext {
        &self.context
    }

    /// Discard all state from a previous build.
    pub fn begin_build(&mut self) {
        self.registry.clear();
        self.store.clear();
        self.context.reset();
        self.current_document.clear();
        self.redefinitions.clear();
        self.crossrefs.clear();
    }

    /// Set the document that subsequent registrations belong to.
    pub fn set_document(&mut self, docname: impl Into<String>) {
        self.current_document = docname.into();
    }

    pub fn current_document(&self) -> &str {
        &self.current_document
    }

    /// Register an entry under `short_name` in the current document.
    ///
    /// An existing entry with the same signature is replaced and the
    /// signature is recorded in [`Catalog::redefinitions`].
    pub fn register(&mut self, short_name: &str) -> EntryHandle {
        let entry = Entry::new(&self.config.namespace, short_name, &self.current_document);
        let handle = entry.handle();

        if let Some(previous) = self.registry.insert(entry) {
            warn!(
                signature = %previous.signature,
                previous = %previous.source_document,
                current = %self.current_document,
                "entry registered twice, keeping the later definition"
            );
            self.redefinitions.push(previous.signature);
        } else {
            debug!(signature = %handle.signature(), document = %self.current_document, "registered entry");
        }

        self.context.set(handle.signature().clone());
        handle
    }

    /// Signatures registered more than once, in the order they were redefined.
    pub fn redefinitions(&self) -> &[Signature] {
        &self.redefinitions
    }

    pub fn lookup(&self, signature: &str) -> Option<&Entry> {
        self.registry.lookup(signature)
    }

    /// Every registered entry, in first-registration order.
    pub fn get_entries(&self) -> Vec<&Entry> {
        self.registry.all_entries().collect()
    }

    /// Attach `values` of `kind` to the entry behind `handle`.
    pub fn link<I, S>(&mut self, handle: &EntryHandle, kind: AttributeKind, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        debug!(%kind, signature = %handle.signature(), "linking attribute values");
        self.store.link(kind, handle.signature(), values);
    }

    /// Attach `values` to the most recently registered entry, if any.
    fn link_current<I, S>(&mut self, kind: AttributeKind, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(signature) = self.context.current() else {
            warn!(%kind, "attribute link outside a registered entry, ignoring");
            return;
        };
        let handle = EntryHandle::from(signature.clone());
        self.link(&handle, kind, values);
    }

    pub fn link_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.link_current(AttributeKind::Tag, tags);
    }

    /// Authors and editors both land in the author index.
    pub fn link_authors<I, S>(&mut self, authors: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.link_current(AttributeKind::Author, authors);
    }

    pub fn link_publisher(&mut self, publisher: &str) {
        self.link_current(AttributeKind::Publisher, [publisher]);
    }

    pub fn link_journal(&mut self, journal: &str) {
        self.link_current(AttributeKind::Journal, [journal]);
    }

    pub fn link_institution(&mut self, institution: &str) {
        self.link_current(AttributeKind::Institution, [institution]);
    }

    pub fn link_series(&mut self, series: &str) {
        self.link_current(AttributeKind::Series, [series]);
    }

    /// Signatures linked to `value` under `kind`, in link order.
    pub fn entries_for(&self, kind: AttributeKind, value: &str) -> &[Signature] {
        self.store.entries_for(kind, value)
    }

    /// Register `record` in the current document and link its attributes.
    pub fn ingest(&mut self, record: &EntryRecord) -> EntryHandle {
        let handle = self.register(&record.name);
        for (kind, values) in record.attribute_links(&self.config) {
            self.link(&handle, kind, values);
        }
        if let Some(target) = record.crossref.as_deref().map(str::trim) {
            if !target.is_empty() {
                self.crossrefs
                    .push((handle.signature().clone(), target.to_string()));
            }
        }
        handle
    }

    /// Ingest every record of every document, in order.
    pub fn ingest_documents(&mut self, documents: &[SourceDocument]) {
        for document in documents {
            self.set_document(document.docname.as_str());
            for record in &document.entries {
                self.ingest(record);
            }
        }
    }

    /// Cross-references from ingested records that name no registered entry.
    ///
    /// Only meaningful once every document has been ingested, since a
    /// record may refer to an entry defined later.
    pub fn check_crossrefs(&self) -> Vec<(Signature, ResolveError)> {
        let resolver = self.resolver();
        self.crossrefs
            .iter()
            .filter_map(|(source, target)| match resolver.resolve_entry(target) {
                Ok(_) => None,
                Err(e) => {
                    warn!(signature = %source, crossref = %target, "crossref names no registered entry");
                    Some((source.clone(), e))
                }
            })
            .collect()
    }

    /// Generate the index page content for `kind`.
    pub fn build_index(&self, kind: AttributeKind) -> IndexContent {
        index::build_index(&self.registry, self.store.index(kind), &self.config.namespace)
    }

    /// Every index page with its identifier, in page order.
    pub fn index_pages(&self) -> Vec<(IndexPage, String)> {
        AttributeKind::ALL
            .into_iter()
            .map(|kind| {
                let page = kind.page();
                let page_id = page.page_id(&self.config.namespace);
                (page, page_id)
            })
            .collect()
    }

    /// Generate all six index pages.
    pub fn generate_indices(&self) -> Vec<GeneratedIndex> {
        self.index_pages()
            .into_iter()
            .map(|(page, page_id)| GeneratedIndex {
                content: self.build_index(page.kind),
                page,
                page_id,
            })
            .collect()
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}
