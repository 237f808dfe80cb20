// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `P####` id allocation and legacy-id migration.

use std::collections::HashMap;

use pedigree_model::{FamilyStore, PersonId};

/// Returns the numeric suffix of a canonical `P####` id.
fn numeric_suffix(id: &str) -> Option<u32> {
    id.strip_prefix('P')?.parse().ok()
}

/// Ids produced by older imports: free-form tokens rather than `P####`.
fn is_legacy(id: &str) -> bool {
    id.len() > 10 || id.contains('_')
}

fn highest_allocated(store: &FamilyStore) -> u32 {
    store
        .persons()
        .iter()
        .filter_map(|p| numeric_suffix(p.id.as_str()))
        .max()
        .unwrap_or(0)
}

/// Allocates the next unused `P####` id (highest numeric suffix plus one,
/// zero-padded to four digits).
#[must_use]
pub fn next_person_id(store: &FamilyStore) -> PersonId {
    PersonId::new(format!("P{:04}", highest_allocated(store) + 1))
}

/// Rewrites legacy free-form ids to canonical `P####` form.
///
/// Every renamed person keeps their collection position, and every relation
/// slot referencing an old id is rewritten through the old→new map — including
/// slots that dangle on the person side. Returns the number of people renamed.
pub fn normalize_ids(store: &mut FamilyStore) -> usize {
    let mut persons = store.persons().to_vec();
    let mut relations = store.relations().to_vec();

    let mut next = highest_allocated(store) + 1;
    let mut renamed: HashMap<PersonId, PersonId> = HashMap::new();

    for person in &mut persons {
        if is_legacy(person.id.as_str()) {
            let new_id = PersonId::new(format!("P{next:04}"));
            next += 1;
            renamed.insert(person.id.clone(), new_id.clone());
            person.id = new_id;
        }
    }

    if renamed.is_empty() {
        return 0;
    }

    for relation in &mut relations {
        if let Some(new_a) = renamed.get(&relation.a) {
            relation.a = new_a.clone();
        }
        if let Some(new_b) = renamed.get(&relation.b) {
            relation.b = new_b.clone();
        }
    }

    let count = renamed.len();
    store.replace_all(persons, relations);
    count
}
