// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_index::{QuadTree, QuadTreeContainer, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORLD: f64 = 10_000.0;

fn gen_random_rects(count: usize, max_size: f64, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0.0..WORLD - max_size);
            let y = rng.random_range(0.0..WORLD - max_size);
            let w = rng.random_range(1.0..max_size);
            let h = rng.random_range(1.0..max_size);
            Rect::from_xywh(x, y, w, h)
        })
        .collect()
}

fn filled_container(rects: &[Rect<f64>]) -> QuadTreeContainer<f64, usize> {
    let mut c = QuadTreeContainer::new(Rect::new(0.0, 0.0, WORLD, WORLD));
    c.reserve(rects.len());
    for (i, r) in rects.iter().copied().enumerate() {
        c.insert(i, r);
    }
    c
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_insert");
    for &n in &[1_000_usize, 10_000] {
        let rects = gen_random_rects(n, 50.0, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{n}"), |b| {
            b.iter(|| black_box(filled_container(&rects)));
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_find");
    let rects = gen_random_rects(10_000, 50.0, 2);
    let container = filled_container(&rects);
    let queries = gen_random_rects(256, 800.0, 3);

    group.bench_function("find_random_n10000", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            for q in &queries {
                out.clear();
                container.find_into(q, &mut out);
                black_box(out.len());
            }
        });
    });

    // Whole-world queries exercise the fully-contained bulk path.
    let everything = Rect::new(0.0, 0.0, WORLD, WORLD);
    group.bench_function("find_everything_n10000", |b| {
        b.iter(|| black_box(container.find(&everything).len()));
    });

    // Same data through the tree alone, scanning every overlapping node's list.
    let mut tree: QuadTree<f64, usize> = QuadTree::new(everything);
    for (i, r) in rects.iter().copied().enumerate() {
        tree.insert(i, r);
    }
    group.bench_function("tree_find_random_n10000", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            for q in &queries {
                out.clear();
                tree.find_into(q, &mut out);
                black_box(out.len());
            }
        });
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_remove");
    let rects = gen_random_rects(10_000, 50.0, 4);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("remove_all_by_key_n10000", |b| {
        b.iter_batched(
            || {
                let c = filled_container(&rects);
                let keys = c.collect_items();
                (c, keys)
            },
            |(mut c, keys)| {
                for k in keys {
                    c.remove(k);
                }
                black_box(c.len());
            },
            BatchSize::LargeInput,
        );
    });

    // Remove whatever a query hits, the common "delete under cursor" pattern.
    let query = Rect::from_xywh(4_000.0, 4_000.0, 2_000.0, 2_000.0);
    group.bench_function("find_then_remove_n10000", |b| {
        b.iter_batched(
            || filled_container(&rects),
            |mut c| {
                for k in c.find(&query) {
                    c.remove(k);
                }
                black_box(c.len());
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_update");
    let rects = gen_random_rects(10_000, 50.0, 5);
    let moved = gen_random_rects(10_000, 50.0, 6);
    group.bench_function("move_all_n10000", |b| {
        b.iter_batched(
            || {
                let c = filled_container(&rects);
                let keys = c.collect_items();
                (c, keys)
            },
            |(mut c, keys)| {
                for (k, r) in keys.into_iter().zip(moved.iter().copied()) {
                    let _ = c.update(k, r);
                }
                black_box(c.len());
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_remove, bench_update);
criterion_main!(benches);
