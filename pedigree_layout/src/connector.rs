// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector geometry: the orthogonal segments joining laid-out nodes.
//!
//! Two connector shapes exist. A couple's cards are joined by a single
//! horizontal *marriage bar* at a fixed drop below the card tops. A parent
//! links to each child through a three-segment right-angle drop: a *stem*
//! from the parent's bottom center down to a mid-height, a horizontal
//! *shoulder* across to the child's center x, and a *riser* from there to
//! the child's top. Every segment is axis-aligned; the engine never
//! requests a diagonal.

use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::metrics::LayoutMetrics;
use crate::node::{LayoutEntity, LayoutNode};

/// An orthogonal segment between two points.
///
/// Debug builds assert the endpoints share an axis.
#[must_use]
pub fn segment(p0: Point, p1: Point) -> Line {
    debug_assert!(
        p0.x == p1.x || p0.y == p1.y,
        "connector endpoints must share an axis"
    );
    Line::new(p0, p1)
}

/// The three segments dropping from a parent to one child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropLines {
    /// Vertical: parent bottom center down to the mid-height.
    pub stem: Line,
    /// Horizontal: parent center x to child center x at the mid-height.
    pub shoulder: Line,
    /// Vertical: mid-height down to the child's top.
    pub riser: Line,
}

impl DropLines {
    /// The segments in draw order.
    #[must_use]
    pub fn segments(&self) -> [Line; 3] {
        [self.stem, self.shoulder, self.riser]
    }
}

/// The horizontal bar joining a couple's cards, or `None` for a single.
#[must_use]
pub fn marriage_bar(node: &LayoutNode<'_>, metrics: &LayoutMetrics) -> Option<Line> {
    match node.entity {
        LayoutEntity::Couple { .. } => {
            let y = node.origin.y + metrics.marriage_bar_drop;
            let left = node.origin.x + metrics.node_width;
            Some(segment(
                Point::new(left, y),
                Point::new(left + metrics.horizontal_gap, y),
            ))
        }
        LayoutEntity::Single(_) => None,
    }
}

/// The right-angle drop from `parent` to one of its laid-out children.
#[must_use]
pub fn drop_lines(
    parent: &LayoutNode<'_>,
    child: &LayoutNode<'_>,
    metrics: &LayoutMetrics,
) -> DropLines {
    let px = parent.center_x(metrics);
    let cx = child.center_x(metrics);
    let parent_bottom = parent.origin.y + metrics.node_height;
    let mid = parent_bottom + metrics.vertical_gap / 2.0;

    DropLines {
        stem: segment(Point::new(px, parent_bottom), Point::new(px, mid)),
        shoulder: segment(Point::new(px.min(cx), mid), Point::new(px.max(cx), mid)),
        riser: segment(Point::new(cx, mid), Point::new(cx, child.origin.y)),
    }
}

/// Collects every connector in `node`'s subtree, in draw order: the node's
/// marriage bar, then per child its drop lines followed by the child's own
/// subtree.
#[must_use]
pub fn connectors(node: &LayoutNode<'_>, metrics: &LayoutMetrics) -> Vec<Line> {
    let mut lines = Vec::new();
    collect(node, metrics, &mut lines);
    lines
}

fn collect(node: &LayoutNode<'_>, metrics: &LayoutMetrics, lines: &mut Vec<Line>) {
    if let Some(bar) = marriage_bar(node, metrics) {
        lines.push(bar);
    }
    for child in &node.children {
        lines.extend(drop_lines(node, child, metrics).segments());
        collect(child, metrics, lines);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::segment;

    #[test]
    fn segments_are_axis_aligned() {
        let v = segment(Point::new(10.0, 0.0), Point::new(10.0, 50.0));
        assert_eq!(v.p0.x, v.p1.x);

        let h = segment(Point::new(0.0, 25.0), Point::new(40.0, 25.0));
        assert_eq!(h.p0.y, h.p1.y);
    }

    #[test]
    #[should_panic(expected = "share an axis")]
    #[cfg(debug_assertions)]
    fn diagonal_segment_asserts() {
        let _ = segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    }
}
