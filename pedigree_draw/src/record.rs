// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording surface: the op stream as data.

use alloc::vec::Vec;

use kurbo::{Line, Rect};
use pedigree_layout::ExpandKey;
use pedigree_model::{Person, PersonId};

use crate::Surface;

/// One recorded draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A person card.
    Card {
        /// Who the card renders.
        person_id: PersonId,
        /// Where it goes.
        rect: Rect,
        /// The node's expansion key, when togglable.
        toggle: Option<ExpandKey>,
    },
    /// A connector segment.
    Line(Line),
}

/// A surface that captures the operations instead of drawing them.
///
/// Useful in tests and for snapshotting a presentation pass; the ops are
/// plain data with no borrow of the store.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// The recorded operations, in presentation order.
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    /// Clears the recording for reuse.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for Recorder {
    fn card(&mut self, person: &Person, rect: Rect, toggle: Option<&ExpandKey>) {
        self.ops.push(DrawOp::Card {
            person_id: person.id.clone(),
            rect,
            toggle: toggle.cloned(),
        });
    }

    fn line(&mut self, line: Line) {
        self.ops.push(DrawOp::Line(line));
    }
}
