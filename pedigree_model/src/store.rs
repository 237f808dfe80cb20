// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned store: person and relation collections plus derived lookups.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::person::Person;
use crate::relation::{Relation, RelationError, RelationKind};

/// Owned, insertion-ordered collections of people and relations.
///
/// The store is an explicit value passed by reference to the layers above
/// it; there is no ambient global. All queries are pure, run in O(n) or
/// O(n·r) over the current collections, and filter out dangling id
/// references instead of failing on them.
///
/// Insertion order is significant: it is the only ordering source for root
/// selection and layout, which keeps a full layout pass deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyStore {
    persons: Vec<Person>,
    relations: Vec<Relation>,
}

impl FamilyStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Builds a store from already-ordered collections.
    ///
    /// No structural validation is performed; this is the entry point for
    /// wholesale document imports, which may carry inconsistent data the
    /// queries are required to tolerate.
    #[must_use]
    pub fn from_parts(persons: Vec<Person>, relations: Vec<Relation>) -> Self {
        Self { persons, relations }
    }

    /// All people, in insertion order.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// All relations, in insertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns `true` if the store holds no people.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Looks up a person by id.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == *id)
    }

    /// The first recorded spouse of `id`, if any.
    ///
    /// When more than one spouse relation is recorded, the first one in
    /// insertion order wins here; [`FamilyStore::spouses_of`] exposes the
    /// full list. A spouse relation whose other side is dangling is skipped.
    #[must_use]
    pub fn spouse_of(&self, id: &str) -> Option<&Person> {
        self.spouses_of(id).next()
    }

    /// All recorded spouses of `id`, in relation-insertion order, dangling
    /// references filtered.
    ///
    /// The returned items borrow from the store, not from `id`.
    pub fn spouses_of<'s>(&'s self, id: &str) -> impl Iterator<Item = &'s Person> {
        self.relations
            .iter()
            .filter(move |r| r.kind == RelationKind::Spouse && r.involves(id))
            .filter_map(move |r| self.person(r.other(id)?.as_str()))
    }

    /// Children of `parent_id`, in relation-insertion order.
    #[must_use]
    pub fn children_of(&self, parent_id: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|r| r.kind == RelationKind::ParentChild && r.a == *parent_id)
            .filter_map(|r| self.person(r.b.as_str()))
            .collect()
    }

    /// Recorded parents of `child_id`, in relation-insertion order.
    #[must_use]
    pub fn parents_of(&self, child_id: &str) -> SmallVec<[&Person; 2]> {
        self.relations
            .iter()
            .filter(|r| r.kind == RelationKind::ParentChild && r.b == *child_id)
            .filter_map(|r| self.person(r.a.as_str()))
            .collect()
    }

    /// Union of both parents' children, de-duplicated by id.
    ///
    /// `a`'s children come first; `b`'s children follow in first-seen order.
    /// A child recorded under both parents appears once.
    #[must_use]
    pub fn combined_children_of(&self, a: &str, b: &str) -> Vec<&Person> {
        let mut combined = self.children_of(a);
        for child in self.children_of(b) {
            if !combined.iter().any(|c| c.id == child.id) {
                combined.push(child);
            }
        }
        combined
    }

    /// Inserts a person, or replaces the person with the same id in place.
    ///
    /// Replacement keeps the original collection position, so downstream
    /// ordering is unaffected by edits.
    pub fn upsert_person(&mut self, person: Person) {
        match self.persons.iter_mut().find(|p| p.id == person.id) {
            Some(slot) => *slot = person,
            None => self.persons.push(person),
        }
    }

    /// Removes a person and every relation referencing it.
    ///
    /// Returns `true` if a person with that id existed. The relation
    /// cascade runs regardless, which also clears any edges that were
    /// already dangling on this id.
    pub fn remove_person(&mut self, id: &str) -> bool {
        self.relations.retain(|r| !r.involves(id));
        let before = self.persons.len();
        self.persons.retain(|p| p.id != *id);
        self.persons.len() != before
    }

    /// Inserts a relation, enforcing the structural invariants.
    ///
    /// Rejects a relation whose slots name the same person, and a relation
    /// that already exists in either slot order with the same kind. The
    /// referenced ids are *not* required to exist.
    pub fn add_relation(&mut self, relation: Relation) -> Result<(), RelationError> {
        if relation.a == relation.b {
            return Err(RelationError::SelfReference);
        }
        if self.relations.iter().any(|r| r.is_duplicate_of(&relation)) {
            return Err(RelationError::Duplicate);
        }
        self.relations.push(relation);
        Ok(())
    }

    /// Removes the relation joining `a` and `b` with `kind`, in either slot
    /// order. Returns `true` if one was removed.
    pub fn remove_relation(&mut self, a: &str, b: &str, kind: RelationKind) -> bool {
        let before = self.relations.len();
        self.relations.retain(|r| !r.links(a, b, kind));
        self.relations.len() != before
    }

    /// Replaces both collections wholesale (document import).
    pub fn replace_all(&mut self, persons: Vec<Person>, relations: Vec<Relation>) {
        self.persons = persons;
        self.relations = relations;
    }
}

#[cfg(test)]
mod tests {
    use super::FamilyStore;
    use crate::person::{Gender, Person};
    use crate::relation::{Relation, RelationError, RelationKind};

    fn store() -> FamilyStore {
        let mut s = FamilyStore::new();
        s.upsert_person(Person::new("P0001", "Luis", "Viera", Gender::Male));
        s.upsert_person(Person::new("P0002", "Ana", "Soler", Gender::Female));
        s.upsert_person(Person::new("P0003", "Mar", "Viera", Gender::Female));
        s.add_relation(Relation::spouse("P0001", "P0002")).unwrap();
        s.add_relation(Relation::parent_child("P0001", "P0003"))
            .unwrap();
        s.add_relation(Relation::parent_child("P0002", "P0003"))
            .unwrap();
        s
    }

    #[test]
    fn spouse_lookup_in_either_slot() {
        let s = store();
        assert_eq!(s.spouse_of("P0001").unwrap().id.as_str(), "P0002");
        assert_eq!(s.spouse_of("P0002").unwrap().id.as_str(), "P0001");
        assert!(s.spouse_of("P0003").is_none());
    }

    #[test]
    fn combined_children_deduplicate() {
        let s = store();
        let combined = s.combined_children_of("P0001", "P0002");
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id.as_str(), "P0003");
    }

    #[test]
    fn duplicate_rejected_in_reversed_slots() {
        let mut s = store();
        assert_eq!(
            s.add_relation(Relation::spouse("P0002", "P0001")),
            Err(RelationError::Duplicate)
        );
        assert_eq!(
            s.add_relation(Relation::parent_child("P0003", "P0001")),
            Err(RelationError::Duplicate)
        );
    }

    #[test]
    fn self_relation_rejected() {
        let mut s = store();
        assert_eq!(
            s.add_relation(Relation::spouse("P0001", "P0001")),
            Err(RelationError::SelfReference)
        );
    }

    #[test]
    fn remove_person_cascades_relations() {
        let mut s = store();
        assert!(s.remove_person("P0001"));
        assert!(s.spouse_of("P0002").is_none());
        let parents = s.parents_of("P0003");
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].id.as_str(), "P0002");
        drop(parents);
        assert!(!s.remove_person("P0001"));
    }

    #[test]
    fn dangling_references_are_filtered() {
        let mut s = store();
        // Point a relation at an id that never existed.
        s.add_relation(Relation::parent_child("P0001", "P9999"))
            .unwrap();
        assert_eq!(s.children_of("P0001").len(), 1);

        // Remove the spouse; the marriage edge is gone with it.
        s.remove_person("P0002");
        assert!(s.spouse_of("P0001").is_none());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut s = store();
        let mut renamed = Person::new("P0001", "Luis Maria", "Viera", Gender::Male);
        renamed.birth_date = Some("1950-01-31".into());
        s.upsert_person(renamed);

        assert_eq!(s.persons().len(), 3);
        assert_eq!(s.persons()[0].given_name, "Luis Maria");
    }

    #[test]
    fn multiple_spouses_first_match_wins() {
        let mut s = store();
        s.upsert_person(Person::new("P0004", "Rosa", "Gil", Gender::Female));
        s.add_relation(Relation::spouse("P0001", "P0004")).unwrap();

        assert_eq!(s.spouse_of("P0001").unwrap().id.as_str(), "P0002");
        let all: alloc::vec::Vec<_> = s.spouses_of("P0001").map(|p| p.id.as_str()).collect();
        assert_eq!(all, ["P0002", "P0004"]);
    }
}
