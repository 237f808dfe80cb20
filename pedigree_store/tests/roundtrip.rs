// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import/export round trips and the bootstrap ladder.

use pedigree_model::{FamilyStore, Gender, Person, Relation};
use pedigree_store::{
    ExportOptions, LoadOutcome, MemoryCache, bootstrap, export_json, import_into, parse_document,
};

fn sample_store() -> FamilyStore {
    let mut store = FamilyStore::new();
    let mut ana = Person::new("P0001", "Ana", "Soler", Gender::Female);
    ana.birth_date = Some("1950-06-01".into());
    ana.birth_place = Some("Valencia".into());
    store.upsert_person(ana);
    store.upsert_person(Person::new("P0002", "Luis", "Viera", Gender::Male));
    store.upsert_person(Person::new("P0003", "Mar", "Viera", Gender::Female));
    store.add_relation(Relation::spouse("P0001", "P0002")).unwrap();
    store
        .add_relation(Relation::parent_child("P0001", "P0003"))
        .unwrap();
    store
}

#[test]
fn export_import_round_trips() {
    let original = sample_store();
    let json = export_json(&original, &ExportOptions::default()).unwrap();

    let mut imported = FamilyStore::new();
    import_into(&mut imported, &json).unwrap();
    assert_eq!(imported, original);

    // And a second export is byte-identical.
    let json_again = export_json(&imported, &ExportOptions::default()).unwrap();
    assert_eq!(json_again, json);
}

#[test]
fn metadata_survives_parsing_as_extra_keys() {
    let store = sample_store();
    let json = export_json(
        &store,
        &ExportOptions {
            export_date: Some("2026-08-06T00:00:00Z".into()),
            version: Some("2.0".into()),
        },
    )
    .unwrap();

    // The envelope keys are ignored on import; the collections round-trip.
    let document = parse_document(&json).unwrap();
    assert_eq!(document.persons.len(), 3);
    assert_eq!(document.relations.len(), 2);
}

#[test]
fn import_replaces_rather_than_merges() {
    let mut store = sample_store();
    import_into(
        &mut store,
        r#"{ "persons": [{ "id": "P0009", "givenName": "Rosa", "surname": "Gil", "gender": "female" }], "relations": [] }"#,
    )
    .unwrap();

    assert_eq!(store.persons().len(), 1);
    assert_eq!(store.persons()[0].id.as_str(), "P0009");
    assert!(store.relations().is_empty());
}

#[test]
fn failed_import_leaves_the_store_untouched() {
    let mut store = sample_store();
    let before = store.clone();

    assert!(import_into(&mut store, r#"{ "persons": [] }"#).is_err());
    assert!(import_into(&mut store, "definitely not json").is_err());
    assert_eq!(store, before);
}

#[test]
fn bootstrap_prefers_primary_and_refreshes_the_snapshot() {
    let json = export_json(&sample_store(), &ExportOptions::default()).unwrap();
    let mut cache = MemoryCache::default();

    let (store, outcome) = bootstrap(Some(&json), &mut cache);
    assert_eq!(outcome, LoadOutcome::Fresh);
    assert_eq!(store.persons().len(), 3);

    // The fetch fails next time; the snapshot carries the data.
    let (store, outcome) = bootstrap(None, &mut cache);
    assert_eq!(outcome, LoadOutcome::CachedFallback);
    assert_eq!(store.persons().len(), 3);
}

#[test]
fn bootstrap_treats_malformed_primary_as_a_failed_fetch() {
    let json = export_json(&sample_store(), &ExportOptions::default()).unwrap();
    let mut cache = MemoryCache::default();
    cache_store(&mut cache, &json);

    let (store, outcome) = bootstrap(Some("{ broken"), &mut cache);
    assert_eq!(outcome, LoadOutcome::CachedFallback);
    assert_eq!(store.persons().len(), 3);
}

#[test]
fn bootstrap_with_nothing_is_the_empty_notice() {
    let mut cache = MemoryCache::default();
    let (store, outcome) = bootstrap(None, &mut cache);
    assert_eq!(outcome, LoadOutcome::Empty);
    assert!(store.is_empty());
}

fn cache_store(cache: &mut MemoryCache, json: &str) {
    use pedigree_store::SnapshotCache as _;
    cache.store(json);
}
