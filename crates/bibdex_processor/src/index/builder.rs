/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Turns one attribute index into sorted, letter-bucketed page content.

use std::collections::BTreeMap;

use bibdex_core::Signature;
use tracing::{debug, warn};

use super::{bucket_letter, IndexBucket, IndexContent, IndexRow};
use crate::registry::EntryRegistry;
use crate::store::AttributeIndex;

/// Build the page content for `index`.
///
/// Values are sorted case-sensitively and bucketed by their upper-cased
/// first character. Each value's signatures are deduplicated and sorted;
/// signatures with no registered entry are dropped, and a value left with
/// no entries is omitted. Output depends only on the registry and index
/// contents, never on insertion order.
pub fn build_index(registry: &EntryRegistry, index: &AttributeIndex, namespace: &str) -> IndexContent {
    let mut values: Vec<(&str, &[Signature])> = index
        .iter()
        .filter(|(_, signatures)| !signatures.is_empty())
        .collect();
    values.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut buckets: BTreeMap<String, Vec<IndexRow>> = BTreeMap::new();
    for (value, signatures) in values {
        let Some(letter) = bucket_letter(value) else {
            warn!("skipping empty attribute value in index");
            continue;
        };

        let mut signatures: Vec<&Signature> = signatures.iter().collect();
        signatures.sort_unstable();
        signatures.dedup();

        let rows: Vec<IndexRow> = signatures
            .into_iter()
            .filter_map(|sig| {
                let entry = registry.lookup(sig.as_str());
                if entry.is_none() {
                    debug!(signature = %sig, value, "dropping stale signature");
                }
                entry
            })
            .map(|entry| IndexRow::entry(entry, namespace))
            .collect();

        if rows.is_empty() {
            continue;
        }

        let bucket = buckets.entry(letter).or_default();
        bucket.push(IndexRow::heading(value));
        bucket.extend(rows);
    }

    IndexContent {
        buckets: buckets
            .into_iter()
            .map(|(letter, rows)| IndexBucket { letter, rows })
            .collect(),
        collapse: true,
    }
}
