// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad-tree selection sweep.
//!
//! Scatter random blocks over a large world, then drag a square selection
//! across it row by row, removing every block the selection touches.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example quadtrees`

use std::time::Instant;

use quadrant_demos::{DemoConfig, init_tracing, scene};
use quadrant_index::{QuadTreeContainer, Rect, TreeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let cfg = &config.quadtrees;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let world = Rect::new(0.0, 0.0, cfg.world_size, cfg.world_size);
    let mut blocks =
        QuadTreeContainer::from_config(TreeConfig::new(world).with_max_depth(cfg.max_depth))?;
    let started = Instant::now();
    for block in scene::random_blocks(&mut rng, cfg) {
        blocks.insert(block, block.area);
    }
    info!(
        objects = blocks.len(),
        nodes = blocks.collect_areas().len(),
        depth = blocks.tree().depth(),
        elapsed = ?started.elapsed(),
        "world populated"
    );

    let visible = blocks.find(&world).len();
    info!(visible, "initial frame");

    let mut removed = 0_usize;
    let started = Instant::now();
    for (step, center) in scene::sweep(cfg.world_size, cfg.sweep_steps)
        .into_iter()
        .enumerate()
    {
        let selected = scene::selection(center, cfg.search_area_size);
        let hits = blocks.find(&selected);
        for key in &hits {
            if blocks.remove(*key) {
                removed += 1;
            }
        }
        debug!(step, x = center.x, y = center.y, hits = hits.len(), "selection swept");
    }
    info!(
        removed,
        remaining = blocks.len(),
        elapsed = ?started.elapsed(),
        "sweep finished"
    );

    let visible = blocks.find(&world).len();
    anyhow::ensure!(
        visible == blocks.len(),
        "world query saw {visible} of {} blocks",
        blocks.len()
    );
    info!(visible, nodes = blocks.collect_areas().len(), "final frame");
    Ok(())
}
