// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing configuration for the layout pass.

use kurbo::Point;

/// Card dimensions and gaps, in world units (logical pixels).
///
/// All layout arithmetic reads these; there are no bare constants in the
/// engine. The defaults match the card size the stock stylesheet renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Width of one person card.
    pub node_width: f64,
    /// Height of one person card.
    pub node_height: f64,
    /// Gap between sibling subtrees, and between the two cards of a couple.
    pub horizontal_gap: f64,
    /// Gap between a parent row and its child row.
    pub vertical_gap: f64,
    /// Gap between one root group's bounding-box bottom and the next
    /// group's top.
    pub group_gap: f64,
    /// Vertical offset of the marriage bar below the card tops.
    pub marriage_bar_drop: f64,
    /// Top-left starting point of the first root group.
    pub origin: Point,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            node_height: 200.0,
            horizontal_gap: 30.0,
            vertical_gap: 100.0,
            group_gap: 250.0,
            marriage_bar_drop: 60.0,
            origin: Point::new(0.0, 50.0),
        }
    }
}

impl LayoutMetrics {
    /// Footprint width of a couple: two cards plus the inter-spouse gap.
    #[must_use]
    pub fn couple_width(&self) -> f64 {
        self.node_width * 2.0 + self.horizontal_gap
    }

    /// Vertical distance from a parent row's top to its child row's top.
    #[must_use]
    pub fn child_row_offset(&self) -> f64 {
        self.node_height + self.vertical_gap
    }
}
