// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand/collapse state: which laid-out nodes show their children.

use core::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashSet};
use pedigree_model::{FamilyStore, PersonId};

use crate::node::couple_order;

/// Identity of an expandable node.
///
/// A single person is keyed by their id; a couple is keyed by the ordered
/// (descendant, spouse) pair the layout engine resolves for it. The engine
/// always emits the canonical key with each node, so hosts can feed a
/// clicked node's key straight back into [`ExpandState::toggle`] without
/// re-deriving the couple order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandKey {
    /// A person rendered on their own.
    Person(PersonId),
    /// A couple, descendant first.
    Couple {
        /// The partner with recorded parents (or the tie-break first slot).
        descendant: PersonId,
        /// The married-in partner.
        spouse: PersonId,
    },
}

impl ExpandKey {
    /// Key for a single person.
    pub fn person(id: impl Into<PersonId>) -> Self {
        Self::Person(id.into())
    }

    /// Key for a couple, descendant first.
    pub fn couple(descendant: impl Into<PersonId>, spouse: impl Into<PersonId>) -> Self {
        Self::Couple {
            descendant: descendant.into(),
            spouse: spouse.into(),
        }
    }
}

impl core::fmt::Display for ExpandKey {
    /// The canonical text form: the person id, or
    /// `<descendant id>-<spouse id>` for couples.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Person(id) => write!(f, "{id}"),
            Self::Couple { descendant, spouse } => write!(f, "{descendant}-{spouse}"),
        }
    }
}

// Manual impl so the borrowed lookup key below hashes identically.
impl Hash for ExpandKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Person(id) => {
                state.write_u8(0);
                id.as_str().hash(state);
            }
            Self::Couple { descendant, spouse } => {
                state.write_u8(1);
                descendant.as_str().hash(state);
                spouse.as_str().hash(state);
            }
        }
    }
}

/// Borrowed form of [`ExpandKey`] for allocation-free set lookups.
enum KeyRef<'a> {
    Person(&'a str),
    Couple(&'a str, &'a str),
}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Person(id) => {
                state.write_u8(0);
                id.hash(state);
            }
            Self::Couple(descendant, spouse) => {
                state.write_u8(1);
                descendant.hash(state);
                spouse.hash(state);
            }
        }
    }
}

impl Equivalent<ExpandKey> for KeyRef<'_> {
    fn equivalent(&self, key: &ExpandKey) -> bool {
        match (self, key) {
            (Self::Person(a), ExpandKey::Person(b)) => *a == b.as_str(),
            (Self::Couple(d1, s1), ExpandKey::Couple { descendant, spouse }) => {
                *d1 == descendant.as_str() && *s1 == spouse.as_str()
            }
            _ => false,
        }
    }
}

/// The set of expanded node keys.
///
/// Starts empty (everything collapsed), is mutated by host toggle events,
/// and lives only as long as the current view — it is never serialized.
/// Every mutation is expected to be followed by a full re-layout, driven by
/// the caller.
#[derive(Clone, Debug, Default)]
pub struct ExpandState {
    keys: HashSet<ExpandKey>,
}

impl ExpandState {
    /// Creates an empty (fully collapsed) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no node is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of expanded keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if exactly this key is present.
    #[must_use]
    pub fn contains(&self, key: &ExpandKey) -> bool {
        self.keys.contains(key)
    }

    /// Flips a key and returns the new state: `true` if it is now expanded.
    pub fn toggle(&mut self, key: ExpandKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Expands every person, and every couple under its canonical key.
    pub fn expand_all(&mut self, store: &FamilyStore) {
        for person in store.persons() {
            self.keys.insert(ExpandKey::Person(person.id.clone()));
            if let Some(spouse) = store.spouse_of(person.id.as_str()) {
                let (descendant, spouse) = couple_order(store, person, spouse);
                self.keys
                    .insert(ExpandKey::couple(descendant.id.clone(), spouse.id.clone()));
            }
        }
    }

    /// Collapses everything.
    pub fn collapse_all(&mut self) {
        self.keys.clear();
    }

    /// Whether a lone person's node is expanded.
    #[must_use]
    pub fn is_person_expanded(&self, id: &str) -> bool {
        self.keys.contains(&KeyRef::Person(id))
    }

    /// Whether a couple's node is expanded.
    ///
    /// True when the canonical couple key is present, or when the
    /// descendant's bare person key is — the alias that lets person-level
    /// expansion open couples too.
    #[must_use]
    pub fn is_couple_expanded(&self, descendant: &str, spouse: &str) -> bool {
        self.keys.contains(&KeyRef::Couple(descendant, spouse))
            || self.keys.contains(&KeyRef::Person(descendant))
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpandKey, ExpandState};

    #[test]
    fn toggle_flips_membership() {
        let mut state = ExpandState::new();
        assert!(state.toggle(ExpandKey::person("P0001")));
        assert!(state.is_person_expanded("P0001"));
        assert!(!state.toggle(ExpandKey::person("P0001")));
        assert!(state.is_empty());
    }

    #[test]
    fn couple_expansion_via_descendant_alias() {
        let mut state = ExpandState::new();
        state.toggle(ExpandKey::person("P0001"));

        assert!(state.is_couple_expanded("P0001", "P0002"));
        assert!(!state.is_couple_expanded("P0002", "P0001"));
    }

    #[test]
    fn borrowed_lookup_matches_owned_key() {
        let mut state = ExpandState::new();
        state.toggle(ExpandKey::couple("P0001", "P0002"));

        assert!(state.is_couple_expanded("P0001", "P0002"));
        assert!(state.contains(&ExpandKey::couple("P0001", "P0002")));
        assert!(!state.is_person_expanded("P0001"));
    }
}
