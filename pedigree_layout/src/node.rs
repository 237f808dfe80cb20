// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned layout nodes and the couple-ordering rule.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use pedigree_model::{FamilyStore, Person};

use crate::expand::ExpandKey;
use crate::metrics::LayoutMetrics;

/// Orders a spousal pair descendant-first.
///
/// The partner with at least one recorded parent renders in the left slot;
/// a married-in partner (no recorded parents) renders on the right. When
/// neither or both have parents, the input order is preserved — a
/// deliberate deterministic tie-break, not an error.
#[must_use]
pub fn couple_order<'s>(
    store: &FamilyStore,
    a: &'s Person,
    b: &'s Person,
) -> (&'s Person, &'s Person) {
    let a_has_parents = !store.parents_of(a.id.as_str()).is_empty();
    let b_has_parents = !store.parents_of(b.id.as_str()).is_empty();
    if b_has_parents && !a_has_parents {
        (b, a)
    } else {
        (a, b)
    }
}

/// What a layout node renders: one person, or a couple in slot order.
#[derive(Copy, Clone, Debug)]
pub enum LayoutEntity<'s> {
    /// A person rendered on their own.
    Single(&'s Person),
    /// A couple, already ordered by [`couple_order`].
    Couple {
        /// Left slot.
        descendant: &'s Person,
        /// Right slot.
        spouse: &'s Person,
    },
}

impl<'s> LayoutEntity<'s> {
    /// Builds a couple entity, applying the ordering rule to `(a, b)`.
    #[must_use]
    pub fn couple_ordered(store: &FamilyStore, a: &'s Person, b: &'s Person) -> Self {
        let (descendant, spouse) = couple_order(store, a, b);
        Self::Couple { descendant, spouse }
    }

    /// The entity for one person: a couple if they have a spouse on record,
    /// otherwise a single.
    #[must_use]
    pub fn for_person(store: &'s FamilyStore, person: &'s Person) -> Self {
        match store.spouse_of(person.id.as_str()) {
            Some(spouse) => Self::couple_ordered(store, person, spouse),
            None => Self::Single(person),
        }
    }

    /// The expansion key this entity is looked up under.
    #[must_use]
    pub fn key(&self) -> ExpandKey {
        match self {
            Self::Single(person) => ExpandKey::Person(person.id.clone()),
            Self::Couple { descendant, spouse } => {
                ExpandKey::couple(descendant.id.clone(), spouse.id.clone())
            }
        }
    }

    /// Footprint width: one card, or two cards plus the spouse gap.
    #[must_use]
    pub fn width(&self, metrics: &LayoutMetrics) -> f64 {
        match self {
            Self::Single(_) => metrics.node_width,
            Self::Couple { .. } => metrics.couple_width(),
        }
    }

    /// The left-slot person (the descendant for couples).
    #[must_use]
    pub fn primary(&self) -> &'s Person {
        match self {
            Self::Single(person) => person,
            Self::Couple { descendant, .. } => descendant,
        }
    }
}

/// A positioned node: an entity, its children, and the subtree's
/// axis-aligned bounding box.
///
/// Nodes are ephemeral — produced fresh by every layout pass and discarded
/// on the next. They borrow the people they render from the store.
#[derive(Clone, Debug)]
pub struct LayoutNode<'s> {
    /// What this node renders.
    pub entity: LayoutEntity<'s>,
    /// Top-left corner of the node's own footprint, after re-centering.
    pub origin: Point,
    /// Laid-out child subtrees, left to right. Empty when collapsed.
    pub children: Vec<LayoutNode<'s>>,
    /// Union of the node's footprint and every child's bounds.
    pub bounds: Rect,
    /// Whether the store records any children for this entity, independent
    /// of expansion. Collapsed nodes with children are still togglable.
    pub has_children: bool,
}

impl<'s> LayoutNode<'s> {
    /// The expansion key for this node.
    #[must_use]
    pub fn key(&self) -> ExpandKey {
        self.entity.key()
    }

    /// The node's own card row: footprint width by card height at the
    /// origin, excluding children.
    #[must_use]
    pub fn footprint(&self, metrics: &LayoutMetrics) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.entity.width(metrics),
            self.origin.y + metrics.node_height,
        )
    }

    /// Individual card rectangles: one for a single, left and right for a
    /// couple.
    #[must_use]
    pub fn card_rects(&self, metrics: &LayoutMetrics) -> [Option<(Rect, &'s Person)>; 2] {
        let card = |x: f64| {
            Rect::new(
                x,
                self.origin.y,
                x + metrics.node_width,
                self.origin.y + metrics.node_height,
            )
        };
        match self.entity {
            LayoutEntity::Single(person) => [Some((card(self.origin.x), person)), None],
            LayoutEntity::Couple { descendant, spouse } => [
                Some((card(self.origin.x), descendant)),
                Some((
                    card(self.origin.x + metrics.node_width + metrics.horizontal_gap),
                    spouse,
                )),
            ],
        }
    }

    /// The x coordinate child connectors hang from: the card's center for a
    /// single, the middle of the spouse gap for a couple.
    #[must_use]
    pub fn center_x(&self, metrics: &LayoutMetrics) -> f64 {
        match self.entity {
            LayoutEntity::Single(_) => self.origin.x + metrics.node_width / 2.0,
            LayoutEntity::Couple { .. } => {
                self.origin.x + metrics.node_width + metrics.horizontal_gap / 2.0
            }
        }
    }
}

/// Finds the deepest node whose card footprint contains `point`.
///
/// Card footprints only — the space a subtree's bounding box spans between
/// cards is not hittable. Sibling footprints never overlap, so the first
/// match per level is the only match.
#[must_use]
pub fn hit_test<'n, 's>(
    nodes: &'n [LayoutNode<'s>],
    point: Point,
    metrics: &LayoutMetrics,
) -> Option<&'n LayoutNode<'s>> {
    for node in nodes {
        if !node.bounds.contains(point) {
            continue;
        }
        if let Some(hit) = hit_test(&node.children, point, metrics) {
            return Some(hit);
        }
        if node.footprint(metrics).contains(point) {
            return Some(node);
        }
    }
    None
}
