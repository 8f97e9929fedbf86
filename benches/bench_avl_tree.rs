use avl_collections::avl_tree::AvlMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_pairs() -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS)
        .map(|_| (rng.gen(), rng.gen()))
        .collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &(key, val) in &pairs {
                map.insert(key, val);
            }
            map
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let map: BTreeMap<i64, i64> = pairs.iter().cloned().collect();
    c.bench_function("bench btreemap get", |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_map_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench avl_map insert", |b| {
        b.iter(|| {
            let mut map = AvlMap::new();
            for &(key, val) in &pairs {
                map.insert(key, val);
            }
            map
        })
    });
}

fn bench_avl_map_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut map = AvlMap::new();
    for &(key, val) in &pairs {
        map.insert(key, val);
    }
    c.bench_function("bench avl_map get", |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_map_remove(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench avl_map remove", |b| {
        b.iter(|| {
            let mut map = AvlMap::new();
            for &(key, val) in &pairs {
                map.insert(key, val);
            }
            for (key, _) in &pairs {
                black_box(map.remove(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_get,
    bench_avl_map_insert,
    bench_avl_map_get,
    bench_avl_map_remove,
);
criterion_main!(benches);
