// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite field culling.
//!
//! Fill a large world with fixed-size plant sprites and pan a viewport over
//! it. Each frame only fetches the sprites the viewport overlaps, clears a
//! patch around the viewport centre, and lets the remaining visible sprites
//! sway a little.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example collision_quadtrees`

use std::collections::BTreeMap;
use std::time::Instant;

use kurbo::{Point, Size, Vec2};
use quadrant_demos::{DemoConfig, init_tracing, scene};
use quadrant_index::{QuadTreeContainer, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let cfg = &config.collision;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut field = QuadTreeContainer::new(Rect::new(0.0, 0.0, cfg.world_size, cfg.world_size));
    let started = Instant::now();
    let sprites = scene::random_sprites(&mut rng, cfg);
    field.reserve(sprites.len());
    for sprite in sprites {
        field.insert(sprite, sprite.area);
    }
    info!(
        sprites = field.len(),
        depth = field.tree().depth(),
        elapsed = ?started.elapsed(),
        "field planted"
    );

    let viewport = Size::new(cfg.viewport_width, cfg.viewport_height);
    let mut drawn = 0_usize;
    let mut cleared = 0_usize;
    let started = Instant::now();
    for frame in 0..cfg.pans {
        let origin = Point::new(
            rng.random_range(0.0..(cfg.world_size - viewport.width).max(1.0)),
            rng.random_range(0.0..(cfg.world_size - viewport.height).max(1.0)),
        );
        let view: Rect<f64> = kurbo::Rect::from_origin_size(origin, viewport).into();

        let clearing = scene::selection(
            kurbo::Rect::from(view).center(),
            cfg.clear_size,
        );
        for key in field.find(&clearing) {
            if field.remove(key) {
                cleared += 1;
            }
        }

        let visible = field.find(&view);
        let mut by_kind = BTreeMap::new();
        for &key in &visible {
            let Some(sprite) = field.get_mut(key) else {
                continue;
            };
            *by_kind.entry(sprite.plant).or_insert(0_usize) += 1;
            let sway = Vec2::new(rng.random_range(-2.0..2.0), 0.0);
            let moved: Rect<f64> = (kurbo::Rect::from(sprite.area) + sway).into();
            sprite.area = moved;
            field.update(key, moved)?;
        }
        drawn += visible.len();
        debug!(frame, visible = visible.len(), ?by_kind, "frame drawn");
    }
    info!(
        frames = cfg.pans,
        drawn,
        cleared,
        remaining = field.len(),
        elapsed = ?started.elapsed(),
        "panning finished"
    );
    Ok(())
}
