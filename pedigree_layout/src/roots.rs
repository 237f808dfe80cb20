// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root selection: partitioning the store into disjoint root groups.

use alloc::vec::Vec;

use hashbrown::HashSet;
use pedigree_model::{FamilyStore, Person, RelationKind};

/// A top-of-tree entry: a root paired with their root spouse, or a root on
/// their own.
///
/// Derived and ephemeral — produced fresh for each layout pass.
#[derive(Copy, Clone, Debug)]
pub enum RootGroup<'s> {
    /// Two roots married to each other, in person-collection order.
    Couple(&'s Person, &'s Person),
    /// A root with no spouse, or whose spouse is not itself a root.
    Single(&'s Person),
}

/// Partitions the store into root groups.
///
/// A *root* is any person who never appears as the child of a parent-child
/// relation (dangling parent ids still count as "has a recorded parent").
/// Roots are processed in person-collection order: a pairing pass first
/// emits a couple group for each root whose first spouse is also an
/// unprocessed root, then the remaining roots are emitted as singles.
///
/// A root married to a non-root is emitted as a single here; the spouse
/// appears inside their own parents' subtree instead, where the couple
/// forms again. Inconsistent data can therefore render a person twice in
/// different subtrees; no cross-group de-duplication is attempted. Every
/// root appears in exactly one group.
#[must_use]
pub fn select_roots(store: &FamilyStore) -> Vec<RootGroup<'_>> {
    let has_parent: HashSet<&str> = store
        .relations()
        .iter()
        .filter(|r| r.kind == RelationKind::ParentChild)
        .map(|r| r.b.as_str())
        .collect();

    let roots: Vec<&Person> = store
        .persons()
        .iter()
        .filter(|p| !has_parent.contains(p.id.as_str()))
        .collect();

    let mut groups = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for person in &roots {
        if processed.contains(person.id.as_str()) {
            continue;
        }
        if let Some(spouse) = store.spouse_of(person.id.as_str()) {
            if !has_parent.contains(spouse.id.as_str()) && !processed.contains(spouse.id.as_str())
            {
                groups.push(RootGroup::Couple(person, spouse));
                processed.insert(person.id.as_str());
                processed.insert(spouse.id.as_str());
            }
        }
    }

    for person in &roots {
        if !processed.contains(person.id.as_str()) {
            groups.push(RootGroup::Single(person));
            processed.insert(person.id.as_str());
        }
    }

    groups
}
