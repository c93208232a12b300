// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integral image canvas.
//!
//! Paint and erase random brush strokes on a 0/1 canvas, rebuilding the
//! integral image after each stroke, then count painted cells inside a few
//! dragged selections.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example integral_images`

use quadrant_demos::{DemoConfig, init_tracing, scene};
use quadrant_integral::{Grid, IntegralImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let cfg = &config.canvas;
    anyhow::ensure!(cfg.width > 0 && cfg.height > 0, "canvas must not be empty");
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut canvas: Grid<i32> = Grid::new(cfg.width, cfg.height);
    let mut integral = IntegralImage::new();
    for stroke in 0..cfg.strokes {
        let value = i32::from(!rng.random_bool(cfg.erase_probability));
        for (x, y) in scene::brush_stroke(&mut rng, cfg.width, cfg.height, cfg.stroke_length) {
            canvas.set(x, y, value)?;
        }
        integral.calculate_sums(&canvas);
        debug!(stroke, value, painted = integral.total(), "stroke applied");
    }
    info!(
        width = cfg.width,
        height = cfg.height,
        painted = integral.total(),
        "canvas painted"
    );

    for _ in 0..cfg.selections {
        // Drags can go in any direction.
        let press = (rng.random_range(0..cfg.width), rng.random_range(0..cfg.height));
        let release = (rng.random_range(0..cfg.width), rng.random_range(0..cfg.height));
        let selected = integral.region_sum_spanning(press, release);

        let start = (press.0.min(release.0), press.1.min(release.1));
        let end = (press.0.max(release.0), press.1.max(release.1));
        anyhow::ensure!(integral.region_sum(start, end)? == selected);
        info!(?press, ?release, selected, "selection");
    }
    Ok(())
}
