// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_view --heading-base-level=0

//! Pedigree View: headless viewport state for the tree canvas.
//!
//! [`TreeViewport`] tracks the one camera model the tree view needs: a
//! uniform zoom factor stepped in `0.1` increments and clamped to
//! `[0.5, 2.0]`, anchored at the top center of the view, with the world
//! horizontally centered whenever it fits. It converts points and
//! rectangles between world space (layout coordinates) and view/device
//! space (pixels), which is how host clicks find their way back to
//! [`hit_test`](../pedigree_layout/fn.hit_test.html)-able layout nodes.
//!
//! The crate owns no scene and performs no rendering; callers feed it the
//! view rectangle and the union of the laid-out root bounds, and read
//! transforms back out.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pedigree_view::TreeViewport;
//!
//! let mut view = TreeViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! view.set_world_bounds(Some(Rect::new(-125.0, 50.0, 345.0, 550.0)));
//!
//! view.zoom_in();
//! assert_eq!(view.zoom(), 1.1);
//!
//! // A device click, mapped into world space for hit testing.
//! let world = view.view_to_world_point(Point::new(400.0, 300.0));
//! assert!(world.x.is_finite());
//! ```
//!
//! This crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

mod viewport;

pub use viewport::TreeViewport;
