// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive layout engine.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use pedigree_model::FamilyStore;

use crate::expand::ExpandState;
use crate::metrics::LayoutMetrics;
use crate::node::{LayoutEntity, LayoutNode};
use crate::roots::{RootGroup, select_roots};

/// Recursion budget. Ancestry deeper than this (only possible with cyclic
/// parent-child data) is rendered collapsed instead of recursed into.
const MAX_DEPTH: usize = 64;

/// Lays out the whole store: one positioned tree per root group, stacked
/// vertically with [`LayoutMetrics::group_gap`] between groups.
///
/// Total over any store state; an empty store yields an empty vector.
#[must_use]
pub fn layout<'s>(
    store: &'s FamilyStore,
    expand: &ExpandState,
    metrics: &LayoutMetrics,
) -> Vec<LayoutNode<'s>> {
    let mut nodes = Vec::new();
    let mut y = metrics.origin.y;

    for (index, group) in select_roots(store).into_iter().enumerate() {
        if index > 0 {
            y += metrics.group_gap;
        }
        let entity = match group {
            RootGroup::Couple(a, b) => LayoutEntity::couple_ordered(store, a, b),
            RootGroup::Single(person) => LayoutEntity::Single(person),
        };
        let node = layout_entity(store, expand, metrics, entity, metrics.origin.x, y);
        y = node.bounds.max_y();
        nodes.push(node);
    }

    nodes
}

/// Lays out one entity and, when expanded, its visible subtree, with the
/// entity's own footprint starting at `(x, y)` before re-centering.
#[must_use]
pub fn layout_entity<'s>(
    store: &'s FamilyStore,
    expand: &ExpandState,
    metrics: &LayoutMetrics,
    entity: LayoutEntity<'s>,
    x: f64,
    y: f64,
) -> LayoutNode<'s> {
    layout_at(store, expand, metrics, entity, x, y, MAX_DEPTH)
}

fn layout_at<'s>(
    store: &'s FamilyStore,
    expand: &ExpandState,
    metrics: &LayoutMetrics,
    entity: LayoutEntity<'s>,
    x: f64,
    y: f64,
    depth: usize,
) -> LayoutNode<'s> {
    let children = match entity {
        LayoutEntity::Single(person) => store.children_of(person.id.as_str()),
        LayoutEntity::Couple { descendant, spouse } => {
            store.combined_children_of(descendant.id.as_str(), spouse.id.as_str())
        }
    };
    let expanded = match entity {
        LayoutEntity::Single(person) => expand.is_person_expanded(person.id.as_str()),
        LayoutEntity::Couple { descendant, spouse } => {
            expand.is_couple_expanded(descendant.id.as_str(), spouse.id.as_str())
        }
    };

    let width = entity.width(metrics);
    let mut node = LayoutNode {
        entity,
        origin: Point::new(x, y),
        children: Vec::new(),
        bounds: Rect::new(x, y, x + width, y + metrics.node_height),
        has_children: !children.is_empty(),
    };

    if children.is_empty() || !expanded || depth == 0 {
        return node;
    }

    // Children go one row down, left to right, each starting at the previous
    // subtree's right bound plus the horizontal gap.
    let child_y = y + metrics.child_row_offset();
    let mut child_x = x;
    let mut span_left = f64::INFINITY;
    let mut span_right = f64::NEG_INFINITY;
    let mut span_bottom = child_y;

    for child in children {
        let child_entity = LayoutEntity::for_person(store, child);
        let child_node = layout_at(
            store,
            expand,
            metrics,
            child_entity,
            child_x,
            child_y,
            depth - 1,
        );
        child_x = child_node.bounds.max_x() + metrics.horizontal_gap;
        span_left = span_left.min(child_node.bounds.min_x());
        span_right = span_right.max(child_node.bounds.max_x());
        span_bottom = span_bottom.max(child_node.bounds.max_y());
        node.children.push(child_node);
    }

    // Re-center the entity over the union span of its children. This can
    // move the origin left of the input `x` when the children are wider
    // than the entity's own footprint.
    let center = span_left + (span_right - span_left) / 2.0;
    let origin_x = center - width / 2.0;
    node.origin.x = origin_x;
    node.bounds = Rect::new(
        origin_x.min(span_left),
        y,
        (origin_x + width).max(span_right),
        span_bottom,
    );

    node
}
