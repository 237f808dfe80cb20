// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_draw --heading-base-level=0

//! Pedigree Draw: the boundary between layout output and a concrete renderer.
//!
//! The layout engine produces positioned nodes; something still has to put
//! pixels (or DOM nodes, or terminal cells) on screen. That something
//! implements [`Surface`] — two operations, one per drawable thing:
//!
//! - [`Surface::card`]: one person's card at a rectangle, with the node's
//!   expand/collapse key attached when the entity has recorded children.
//!   Hosts wire their click handling to that key and feed it back into
//!   [`ExpandState::toggle`](pedigree_layout::ExpandState::toggle), then
//!   re-run layout themselves — nothing here re-renders implicitly.
//! - [`Surface::line`]: one orthogonal connector segment.
//!
//! [`present`] walks a laid-out tree and emits these operations in a fixed
//! order (cards, marriage bar, then per child: drop lines, subtree), so a
//! surface sees an identical op stream for identical layouts.
//!
//! Two surfaces ship with the crate:
//!
//! - [`Recorder`]: captures the op stream as data, for tests and snapshots.
//! - [`SvgSurface`]: renders the tree as an SVG document for inspection and
//!   debugging — gender-tinted cards with names and years, grey connector
//!   lines. Not intended to be pixel-faithful to any host renderer.
//!
//! ```rust
//! use pedigree_draw::{Recorder, present};
//! use pedigree_layout::{ExpandState, LayoutMetrics, layout};
//! use pedigree_model::{FamilyStore, Gender, Person};
//!
//! let mut store = FamilyStore::new();
//! store.upsert_person(Person::new("P0001", "Ana", "Soler", Gender::Female));
//!
//! let metrics = LayoutMetrics::default();
//! let nodes = layout(&store, &ExpandState::new(), &metrics);
//!
//! let mut recorder = Recorder::default();
//! present(&nodes, &metrics, &mut recorder);
//! assert_eq!(recorder.ops.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod record;
mod svg;

use kurbo::{Line, Rect};
use pedigree_layout::{ExpandKey, LayoutMetrics, LayoutNode, connector};
use pedigree_model::Person;
use peniko::Color;

pub use record::{DrawOp, Recorder};
pub use svg::SvgSurface;

/// Card and connector colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Card tint for male persons.
    pub male: Color,
    /// Card tint for female persons.
    pub female: Color,
    /// Connector line color.
    pub line: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            male: Color::from_rgb8(0xdb, 0xea, 0xfe),
            female: Color::from_rgb8(0xfc, 0xe7, 0xf3),
            line: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        }
    }
}

/// A render target for one presentation pass.
pub trait Surface {
    /// Draws one person's card filling `rect`.
    ///
    /// `toggle` is the node's expansion key when the entity has recorded
    /// children (expanded or not); interactive hosts make such cards
    /// clickable and report the key back as a toggle event.
    fn card(&mut self, person: &Person, rect: Rect, toggle: Option<&ExpandKey>);

    /// Draws one orthogonal connector segment.
    fn line(&mut self, line: Line);
}

/// Presents laid-out root groups to a surface, in draw order.
pub fn present<S: Surface + ?Sized>(
    nodes: &[LayoutNode<'_>],
    metrics: &LayoutMetrics,
    surface: &mut S,
) {
    for node in nodes {
        present_node(node, metrics, surface);
    }
}

fn present_node<S: Surface + ?Sized>(
    node: &LayoutNode<'_>,
    metrics: &LayoutMetrics,
    surface: &mut S,
) {
    let toggle = node.has_children.then(|| node.key());
    for (rect, person) in node.card_rects(metrics).into_iter().flatten() {
        surface.card(person, rect, toggle.as_ref());
    }
    if let Some(bar) = connector::marriage_bar(node, metrics) {
        surface.line(bar);
    }
    for child in &node.children {
        for segment in connector::drop_lines(node, child, metrics).segments() {
            surface.line(segment);
        }
        present_node(child, metrics, surface);
    }
}

#[cfg(test)]
mod tests {
    use pedigree_layout::{ExpandKey, ExpandState, LayoutMetrics, layout};
    use pedigree_model::{FamilyStore, Gender, Person, Relation};

    use super::{DrawOp, Recorder, present};

    fn family() -> FamilyStore {
        let mut store = FamilyStore::new();
        store.upsert_person(Person::new("P0001", "Luis", "Viera", Gender::Male));
        store.upsert_person(Person::new("P0002", "Ana", "Soler", Gender::Female));
        store.upsert_person(Person::new("P0003", "Mar", "Viera", Gender::Female));
        store.add_relation(Relation::spouse("P0001", "P0002")).unwrap();
        store
            .add_relation(Relation::parent_child("P0001", "P0003"))
            .unwrap();
        store
    }

    #[test]
    fn collapsed_couple_presents_two_cards_and_a_bar() {
        let store = family();
        let metrics = LayoutMetrics::default();
        let nodes = layout(&store, &ExpandState::new(), &metrics);

        let mut recorder = Recorder::default();
        present(&nodes, &metrics, &mut recorder);

        let cards: Vec<_> = recorder
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Card { .. }))
            .collect();
        let lines = recorder.ops.len() - cards.len();
        assert_eq!(cards.len(), 2);
        assert_eq!(lines, 1);

        // Collapsed but togglable: both cards carry the couple key.
        for card in cards {
            let DrawOp::Card { toggle, .. } = card else {
                unreachable!()
            };
            assert_eq!(*toggle, Some(ExpandKey::couple("P0001", "P0002")));
        }
    }

    #[test]
    fn expanded_tree_presents_children_after_their_drop_lines() {
        let store = family();
        let metrics = LayoutMetrics::default();
        let mut expand = ExpandState::new();
        expand.expand_all(&store);
        let nodes = layout(&store, &expand, &metrics);

        let mut recorder = Recorder::default();
        present(&nodes, &metrics, &mut recorder);

        // 2 parent cards + bar + 3 drop segments + 1 child card.
        assert_eq!(recorder.ops.len(), 7);
        let DrawOp::Card { person_id, toggle, .. } = &recorder.ops[6] else {
            panic!("child card must come last");
        };
        assert_eq!(person_id.as_str(), "P0003");
        assert_eq!(*toggle, None, "childless cards are not togglable");
    }

    #[test]
    fn identical_layouts_record_identical_ops() {
        let store = family();
        let metrics = LayoutMetrics::default();
        let mut expand = ExpandState::new();
        expand.expand_all(&store);
        let nodes = layout(&store, &expand, &metrics);

        let mut a = Recorder::default();
        let mut b = Recorder::default();
        present(&nodes, &metrics, &mut a);
        present(&nodes, &metrics, &mut b);
        assert_eq!(a.ops, b.ops);
    }
}
