// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_index::{QuadTreeContainer, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

const WORLD: f64 = 10_000.0;

fn gen_random_rects(count: usize, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0.0..WORLD - 50.0);
            let y = rng.random_range(0.0..WORLD - 50.0);
            Rect::from_xywh(x, y, rng.random_range(1.0..50.0), rng.random_range(1.0..50.0))
        })
        .collect()
}

type Tagged = GeomWithData<Rectangle<[f64; 2]>, usize>;

fn to_rstar_rects(v: &[Rect<f64>]) -> Vec<Tagged> {
    v.iter()
        .enumerate()
        .map(|(i, r)| {
            GeomWithData::new(
                Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]),
                i,
            )
        })
        .collect()
}

fn bench_quadtree_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_rstar");
    for &n in &[1_000_usize, 10_000] {
        let rects = gen_random_rects(n, 11);
        let query = Rect::from_xywh(1_000.0, 1_000.0, 2_000.0, 2_000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadrant_build_query_n{n}"), |b| {
            b.iter_batched(
                || QuadTreeContainer::<f64, usize>::new(Rect::new(0.0, 0.0, WORLD, WORLD)),
                |mut c| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        c.insert(i, r);
                    }
                    black_box(c.find(&query).len());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |items| {
                    let tree = RTree::bulk_load(items);
                    let env = AABB::from_corners(
                        [query.min_x, query.min_y],
                        [query.max_x, query.max_y],
                    );
                    black_box(tree.locate_in_envelope_intersecting(&env).count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_vs_rstar);
criterion_main!(benches);
