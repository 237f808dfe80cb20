// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_model --heading-base-level=0

//! Pedigree Model: people, typed relations, and the queryable family store.
//!
//! This crate owns the data a family tree is built from:
//!
//! - [`Person`]: one individual, identified by a stable [`PersonId`] token.
//! - [`Relation`]: a typed edge between two person ids — a marriage
//!   ([`RelationKind::Spouse`]) or a directed parent→child link
//!   ([`RelationKind::ParentChild`]).
//! - [`FamilyStore`]: the owned collections plus the derived-lookup queries
//!   (spouse, children, parents, combined children of a couple) and the
//!   mutators that keep the collections consistent.
//!
//! It deliberately knows nothing about layout, rendering, or persistence.
//! Higher layers (`pedigree_layout`, `pedigree_store`) consume the store by
//! reference; nothing here is a global.
//!
//! ## Weak references
//!
//! Relations hold plain id pairs, never pointers into the person collection.
//! A relation may reference an id with no matching person (for example after
//! an import of partially inconsistent data); every query tolerates this by
//! filtering the dangling side out. Deleting a person cascades and removes
//! every relation that references it, so dangling references are transient,
//! but queries never assume referential integrity.
//!
//! ## Ordering and determinism
//!
//! Both collections preserve insertion order, and every query that returns a
//! sequence returns it in relation-insertion order. Downstream consumers
//! (root selection, layout) rely on this as their only ordering source, which
//! is what makes a full layout pass reproducible byte for byte.
//!
//! ## Mutation and permissions
//!
//! The mutators on [`FamilyStore`] enforce the structural invariants: no
//! self-relations, no duplicate relation in either slot order. Hosts that
//! need an authorization boundary wrap the store in an [`Editor`], which
//! consults an [`AccessPolicy`] and answers non-admin mutation attempts with
//! [`EditError::PermissionDenied`] instead of silently ignoring them.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_model::{FamilyStore, Gender, Person, Relation, RelationKind};
//!
//! let mut store = FamilyStore::new();
//! store.upsert_person(Person::new("P0001", "Ana", "Viera", Gender::Female));
//! store.upsert_person(Person::new("P0002", "Luis", "Viera", Gender::Male));
//! store.upsert_person(Person::new("P0003", "Mar", "Viera", Gender::Female));
//!
//! store.add_relation(Relation::spouse("P0001", "P0002")).unwrap();
//! store.add_relation(Relation::parent_child("P0001", "P0003")).unwrap();
//!
//! assert_eq!(store.spouse_of("P0001").unwrap().id.as_str(), "P0002");
//! assert_eq!(store.children_of("P0001").len(), 1);
//!
//! // The reversed slot order is the same marriage; inserting it is refused.
//! assert!(store.add_relation(Relation::spouse("P0002", "P0001")).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod edit;
mod person;
mod relation;
mod store;

pub use edit::{AccessPolicy, EditError, Editor};
pub use person::{Gender, Person, PersonId};
pub use relation::{Relation, RelationError, RelationKind};
pub use store::FamilyStore;
