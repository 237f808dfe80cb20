// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot caching and the load fallback ladder.

use pedigree_model::FamilyStore;

use crate::document::parse_document;

/// Platform storage seam for the last-known-good document.
///
/// Hosts back this with whatever durable storage they have (browser local
/// storage, a file, a key-value store). Failures are expressed as `None`;
/// the ladder treats an unreadable snapshot like a missing one.
pub trait SnapshotCache {
    /// The most recently stored document, if any.
    fn load(&self) -> Option<String>;
    /// Stores a document as the new snapshot. Best effort; errors are the
    /// implementation's business.
    fn store(&mut self, json: &str);
}

/// In-memory [`SnapshotCache`] for tests and storage-less hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    snapshot: Option<String>,
}

impl SnapshotCache for MemoryCache {
    fn load(&self) -> Option<String> {
        self.snapshot.clone()
    }

    fn store(&mut self, json: &str) {
        self.snapshot = Some(json.to_owned());
    }
}

/// Which rung of the load ladder produced the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The primary document parsed; the snapshot was refreshed.
    Fresh,
    /// The primary was missing or malformed; the cached snapshot was used.
    CachedFallback,
    /// Neither source was usable. The store is empty; hosts should surface
    /// a recoverable "no data yet" notice, not an error.
    Empty,
}

/// Builds the initial store from the primary document, the cached
/// snapshot, or nothing, in that order.
///
/// `primary` is the fetched document text, or `None` when the fetch itself
/// failed. A malformed primary is treated exactly like a failed fetch.
pub fn bootstrap(primary: Option<&str>, cache: &mut dyn SnapshotCache) -> (FamilyStore, LoadOutcome) {
    if let Some(json) = primary {
        if let Ok(document) = parse_document(json) {
            cache.store(json);
            return (
                FamilyStore::from_parts(document.persons, document.relations),
                LoadOutcome::Fresh,
            );
        }
    }

    if let Some(json) = cache.load() {
        if let Ok(document) = parse_document(&json) {
            log::warn!("primary family data unavailable, using cached snapshot");
            return (
                FamilyStore::from_parts(document.persons, document.relations),
                LoadOutcome::CachedFallback,
            );
        }
    }

    (FamilyStore::new(), LoadOutcome::Empty)
}
