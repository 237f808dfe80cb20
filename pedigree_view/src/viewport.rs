// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Viewport over the laid-out tree.
///
/// `TreeViewport` maps world coordinates (the layout engine's output space)
/// into a rectangular view region. The transform is a uniform zoom anchored
/// at the top of the view: the world's top edge keeps its distance from the
/// view top under any zoom, and the world is centered horizontally whenever
/// its scaled width fits the view, left-aligned otherwise (wider content
/// scrolls).
#[derive(Clone, Debug)]
pub struct TreeViewport {
    view_rect: Rect,
    world_bounds: Option<Rect>,
    // Zoom factor in exact tenths, so stepping never accumulates float
    // error and `zoom()` always lands on the 0.1 grid.
    zoom_tenths: i64,
}

const MIN_TENTHS: i64 = 5;
const MAX_TENTHS: i64 = 20;
const RESET_TENTHS: i64 = 10;

impl TreeViewport {
    /// Smallest permitted zoom factor.
    pub const MIN_ZOOM: f64 = 0.5;
    /// Largest permitted zoom factor.
    pub const MAX_ZOOM: f64 = 2.0;
    /// Zoom increment used by [`TreeViewport::zoom_in`] and
    /// [`TreeViewport::zoom_out`]; `set_zoom` snaps to this grid.
    pub const ZOOM_STEP: f64 = 0.1;

    /// Creates a viewport covering `view_rect` at zoom `1.0` with no world
    /// bounds.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self {
            view_rect,
            world_bounds: None,
            zoom_tenths: RESET_TENTHS,
        }
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    /// Sets the world bounds: the union of the laid-out root groups'
    /// bounding boxes, or `None` for an empty tree.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        self.world_bounds = bounds;
    }

    /// Returns the current world bounds, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Returns the current zoom factor, always on the `0.1` grid.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom_tenths as f64 / 10.0
    }

    /// Sets the zoom factor, snapped to the `0.1` step grid and clamped to
    /// `[0.5, 2.0]`. Non-finite input saturates into the same range.
    pub fn set_zoom(&mut self, zoom: f64) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is clamped to the tenths range below"
        )]
        let tenths = (zoom * 10.0).round() as i64;
        self.zoom_tenths = tenths.clamp(MIN_TENTHS, MAX_TENTHS);
    }

    /// Steps the zoom up by `0.1`, saturating at `2.0`.
    pub fn zoom_in(&mut self) {
        self.zoom_tenths = (self.zoom_tenths + 1).min(MAX_TENTHS);
    }

    /// Steps the zoom down by `0.1`, saturating at `0.5`.
    pub fn zoom_out(&mut self) {
        self.zoom_tenths = (self.zoom_tenths - 1).max(MIN_TENTHS);
    }

    /// Resets the zoom to `1.0`.
    pub fn reset_zoom(&mut self) {
        self.zoom_tenths = RESET_TENTHS;
    }

    /// The world→view transform for the current zoom and bounds.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        let zoom = self.zoom();
        let Some(world) = self.world_bounds else {
            return Affine::translate(self.view_rect.origin().to_vec2()) * Affine::scale(zoom);
        };
        let scaled_width = world.width() * zoom;
        let slack = (self.view_rect.width() - scaled_width).max(0.0);
        let dx = self.view_rect.x0 + slack / 2.0 - world.x0 * zoom;
        let dy = self.view_rect.y0;
        Affine::translate((dx, dy)) * Affine::scale(zoom)
    }

    /// The view→world transform (inverse of [`TreeViewport::world_to_view`]).
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.world_to_view().inverse()
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view() * pt
    }

    /// Converts a view/device-space point into world coordinates, e.g. a
    /// click position on its way to hit testing.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world() * pt
    }

    /// Converts a world-space rectangle into view/device coordinates.
    ///
    /// The transform is axis-aligned, so mapping the two corners is exact.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        let a = self.world_to_view();
        Rect::from_points(a * Point::new(rect.x0, rect.y0), a * Point::new(rect.x1, rect.y1))
    }

    /// Minimum canvas size for the scroll container, in world units:
    /// the world's width plus a margin of 200, and its bottom plus 100.
    /// Zero when there are no world bounds.
    #[must_use]
    pub fn content_size(&self) -> Size {
        match self.world_bounds {
            Some(world) => Size::new(world.width() + 200.0, world.max_y() + 100.0),
            None => Size::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::TreeViewport;

    #[test]
    fn zoom_steps_and_clamps() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(vp.zoom(), 1.0);

        vp.zoom_in();
        assert_eq!(vp.zoom(), 1.1);

        for _ in 0..20 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom(), 2.0);

        for _ in 0..30 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom(), 0.5);

        vp.reset_zoom();
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn set_zoom_snaps_to_the_step_grid() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.set_zoom(1.34);
        assert_eq!(vp.zoom(), 1.3);
        vp.set_zoom(0.01);
        assert_eq!(vp.zoom(), 0.5);
        vp.set_zoom(9.9);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn narrow_world_is_centered_and_top_margin_scales() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.set_world_bounds(Some(Rect::new(-125.0, 50.0, 345.0, 550.0)));

        // 470 wide at zoom 1 in an 800-wide view: 165 of slack each side.
        let left = vp.world_to_view_point(Point::new(-125.0, 50.0));
        let right = vp.world_to_view_point(Point::new(345.0, 50.0));
        assert_eq!(left.x, 165.0);
        assert_eq!(right.x, 635.0);
        // World y is measured from the world origin, so the layout's own
        // top margin survives.
        assert_eq!(left.y, 50.0);

        vp.set_zoom(2.0);
        let top = vp.world_to_view_point(Point::new(-125.0, 50.0));
        assert_eq!(top.y, 100.0);
    }

    #[test]
    fn wide_world_left_aligns() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 400.0, 600.0));
        vp.set_world_bounds(Some(Rect::new(-125.0, 50.0, 875.0, 550.0)));

        let left = vp.world_to_view_point(Point::new(-125.0, 0.0));
        assert_eq!(left.x, 0.0);
        let right = vp.world_to_view_point(Point::new(875.0, 0.0));
        assert_eq!(right.x, 1000.0);
    }

    #[test]
    fn view_world_round_trip() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.set_world_bounds(Some(Rect::new(0.0, 50.0, 470.0, 250.0)));
        vp.set_zoom(1.5);

        let device = Point::new(123.0, 456.0);
        let world = vp.view_to_world_point(device);
        let back = vp.world_to_view_point(world);
        assert!((back.x - device.x).abs() < 1e-9);
        assert!((back.y - device.y).abs() < 1e-9);
    }

    #[test]
    fn content_size_is_padded() {
        let mut vp = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(vp.content_size(), kurbo::Size::ZERO);

        vp.set_world_bounds(Some(Rect::new(-125.0, 50.0, 345.0, 550.0)));
        let size = vp.content_size();
        assert_eq!(size.width, 670.0);
        assert_eq!(size.height, 650.0);
    }
}
