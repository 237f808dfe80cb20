// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_store --heading-base-level=0

//! Pedigree Store: the JSON persistence boundary for family data.
//!
//! Everything that crosses a storage or network edge goes through this
//! crate, as text — it performs no I/O itself. Hosts fetch, upload, and
//! persist bytes however their platform does and hand the strings here.
//!
//! - [`parse_document`] / [`import_into`]: accept a `{ persons, relations }`
//!   JSON document. A document without both top-level keys is rejected with
//!   [`FormatError::MissingKeys`]; a successful import *replaces* the store
//!   contents, never merges. On any error the store is untouched.
//! - [`export_json`]: produce the same shape, optionally stamped with
//!   `exportDate`/`version` metadata supplied by the caller (this crate
//!   reads no clock).
//! - [`bootstrap`]: the load ladder — parse the primary document and
//!   refresh the snapshot, else fall back to the cached snapshot, else
//!   start empty. The outcome tells the host which rung was hit;
//!   [`LoadOutcome::Empty`] is the recoverable "no data yet" notice.
//! - [`SnapshotCache`]: the platform storage seam ([`MemoryCache`] ships
//!   for tests and hosts without durable storage).
//! - [`next_person_id`] / [`normalize_ids`]: `P####` id allocation and
//!   legacy-id migration.
//!
//! ```rust
//! use pedigree_store::{MemoryCache, bootstrap, export_json, ExportOptions, LoadOutcome};
//!
//! let doc = r#"{ "persons": [], "relations": [] }"#;
//! let mut cache = MemoryCache::default();
//!
//! let (store, outcome) = bootstrap(Some(doc), &mut cache);
//! assert_eq!(outcome, LoadOutcome::Fresh);
//!
//! // The snapshot was refreshed; a later failed fetch falls back to it.
//! let (_store, outcome) = bootstrap(None, &mut cache);
//! assert_eq!(outcome, LoadOutcome::CachedFallback);
//!
//! let json = export_json(&store, &ExportOptions::default()).unwrap();
//! assert!(json.contains("\"persons\""));
//! ```

mod document;
mod ids;
mod snapshot;

pub use document::{
    ExportOptions, FamilyDocument, FormatError, export_file_name, export_json, import_into,
    parse_document,
};
pub use ids::{next_person_id, normalize_ids};
pub use snapshot::{LoadOutcome, MemoryCache, SnapshotCache, bootstrap};
