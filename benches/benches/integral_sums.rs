// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_integral::{Grid, IntegralImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(width: usize, height: usize, seed: u64) -> Grid<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.random()).collect();
    Grid::from_vec(width, height, data).expect("dimensions match data length")
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integral_calculate");
    for &n in &[256_usize, 1024] {
        let grid = random_grid(n, n, 1);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("calculate_sums_{n}x{n}"), |b| {
            let mut image = IntegralImage::new();
            b.iter(|| {
                image.calculate_sums(&grid);
                black_box(image.total());
            });
        });
    }
    group.finish();
}

fn bench_region_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("integral_region_sum");
    let n = 1024;
    let grid = random_grid(n, n, 2);
    let image = IntegralImage::from_grid(&grid);
    let mut rng = StdRng::seed_from_u64(3);
    let regions: Vec<_> = (0..1024)
        .map(|_| {
            let x0 = rng.random_range(0..n);
            let y0 = rng.random_range(0..n);
            ((x0, y0), (rng.random_range(x0..n), rng.random_range(y0..n)))
        })
        .collect();
    group.throughput(Throughput::Elements(regions.len() as u64));

    group.bench_function("region_sum_1024x1024", |b| {
        b.iter(|| {
            let mut acc = 0_u64;
            for &(start, end) in &regions {
                acc = acc.wrapping_add(image.region_sum(start, end).unwrap_or(0));
            }
            black_box(acc);
        });
    });

    // Direct summation of the same regions, for scale.
    group.bench_function("direct_sum_1024x1024", |b| {
        b.iter(|| {
            let mut acc = 0_u64;
            for &((x0, y0), (x1, y1)) in regions.iter().take(16) {
                for y in y0..=y1 {
                    let row = grid.row(y).unwrap_or(&[]);
                    acc += row[x0..=x1].iter().map(|&v| u64::from(v)).sum::<u64>();
                }
            }
            black_box(acc);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_calculate, bench_region_sum);
criterion_main!(benches);
