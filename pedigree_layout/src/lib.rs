// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_layout --heading-base-level=0

//! Pedigree Layout: deterministic family-tree layout and connector geometry.
//!
//! Given a [`FamilyStore`](pedigree_model::FamilyStore) and an expand/collapse
//! set, this crate produces a positioned tree of nodes ready to draw:
//!
//! - [`select_roots`]: partitions the store into disjoint root groups — a
//!   *root* is any person with no recorded parent, paired with their spouse
//!   when the spouse is also a root.
//! - [`ExpandState`]: the set of [`ExpandKey`]s naming which nodes are open.
//!   Toggled by the host in response to clicks; never persisted.
//! - [`layout`]: the recursive engine. Couples order themselves
//!   descendant-first, expanded nodes lay their children out left to right,
//!   parents re-center over the span of their children, and root groups
//!   stack vertically. Every node carries its origin and an axis-aligned
//!   bounding box ([`kurbo::Rect`]).
//! - [`connector`]: orthogonal line segments joining laid-out nodes — the
//!   marriage bar between spouses and the stem/shoulder/riser drop from a
//!   parent to each child.
//!
//! ## Totality
//!
//! Layout cannot fail. It is defined for any store state — empty, cyclic,
//! or inconsistent — and produces an empty or partial tree rather than an
//! error. Dangling relation references are filtered by the store's queries;
//! cyclic parent-child data is cut off by a fixed recursion budget. There is
//! no error type in this crate.
//!
//! ## Determinism
//!
//! For a fixed store and expand state, [`layout`] output is identical across
//! calls. The only ordering source is collection-insertion order; hash sets
//! are used for membership tests only.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_layout::{layout, ExpandState, LayoutMetrics};
//! use pedigree_model::{FamilyStore, Gender, Person, Relation};
//!
//! let mut store = FamilyStore::new();
//! store.upsert_person(Person::new("P0001", "Luis", "Viera", Gender::Male));
//! store.upsert_person(Person::new("P0002", "Ana", "Soler", Gender::Female));
//! store.add_relation(Relation::spouse("P0001", "P0002")).unwrap();
//!
//! let metrics = LayoutMetrics::default();
//! let mut expand = ExpandState::new();
//! let roots = layout(&store, &expand, &metrics);
//!
//! assert_eq!(roots.len(), 1);
//! // A collapsed couple occupies exactly two cards plus the spouse gap.
//! assert_eq!(roots[0].bounds.width(), metrics.couple_width());
//!
//! expand.expand_all(&store);
//! let roots = layout(&store, &expand, &metrics);
//! // No children recorded, so expansion changes nothing.
//! assert_eq!(roots[0].bounds.width(), metrics.couple_width());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod connector;
mod engine;
mod expand;
mod metrics;
mod node;
mod roots;

pub use engine::{layout, layout_entity};
pub use expand::{ExpandKey, ExpandState};
pub use metrics::LayoutMetrics;
pub use node::{LayoutEntity, LayoutNode, couple_order, hit_test};
pub use roots::{RootGroup, select_roots};
