// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-pass benchmarks over synthetic multi-generation families.

use criterion::{Criterion, criterion_group, criterion_main};
use pedigree_layout::{ExpandState, LayoutMetrics, layout};
use pedigree_model::{FamilyStore, Gender, Person, Relation};

fn fresh(store: &mut FamilyStore, next_id: &mut u32, gender: Gender) -> String {
    *next_id += 1;
    let id = format!("P{:05}", *next_id);
    store.upsert_person(Person::new(id.as_str(), "Bench", "Person", gender));
    id
}

fn grow(
    store: &mut FamilyStore,
    next_id: &mut u32,
    parent_a: &str,
    parent_b: &str,
    depth: usize,
    fanout: usize,
) {
    if depth == 0 {
        return;
    }
    for _ in 0..fanout {
        let child = fresh(store, next_id, Gender::Male);
        store
            .add_relation(Relation::parent_child(parent_a, child.as_str()))
            .unwrap();
        store
            .add_relation(Relation::parent_child(parent_b, child.as_str()))
            .unwrap();
        let partner = fresh(store, next_id, Gender::Female);
        store
            .add_relation(Relation::spouse(child.as_str(), partner.as_str()))
            .unwrap();
        grow(store, next_id, &child, &partner, depth - 1, fanout);
    }
}

fn synthetic_family(generations: usize, fanout: usize) -> FamilyStore {
    let mut store = FamilyStore::new();
    let mut next_id = 0;
    let a = fresh(&mut store, &mut next_id, Gender::Male);
    let b = fresh(&mut store, &mut next_id, Gender::Female);
    store
        .add_relation(Relation::spouse(a.as_str(), b.as_str()))
        .unwrap();
    grow(&mut store, &mut next_id, &a, &b, generations, fanout);
    store
}

fn bench_layout(c: &mut Criterion) {
    let store = synthetic_family(4, 3);
    let metrics = LayoutMetrics::default();

    let collapsed = ExpandState::new();
    c.bench_function("layout_collapsed", |bench| {
        bench.iter(|| layout(&store, &collapsed, &metrics));
    });

    let mut expanded = ExpandState::new();
    expanded.expand_all(&store);
    c.bench_function("layout_expanded", |bench| {
        bench.iter(|| layout(&store, &expanded, &metrics));
    });

    c.bench_function("expand_all", |bench| {
        bench.iter(|| {
            let mut state = ExpandState::new();
            state.expand_all(&store);
            state
        });
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
