// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seeded scene generation shared by the demos.

use kurbo::{Point, Size};
use quadrant_index::Rect;
use rand::Rng;

use crate::config::{CollisionConfig, QuadTreesConfig};

/// A coloured rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    /// Placement in world space.
    pub area: Rect<f64>,
    /// RGB fill.
    pub colour: [u8; 3],
}

/// Scatter `cfg.objects` randomly sized blocks over the world.
///
/// Blocks near the far edges may extend past the world; the tree keeps those
/// at its root.
pub fn random_blocks(rng: &mut impl Rng, cfg: &QuadTreesConfig) -> Vec<Block> {
    (0..cfg.objects)
        .map(|_| {
            let origin = Point::new(
                rng.random_range(0.0..cfg.world_size),
                rng.random_range(0.0..cfg.world_size),
            );
            let size = Size::new(
                rng.random_range(cfg.min_size..=cfg.max_size),
                rng.random_range(cfg.min_size..=cfg.max_size),
            );
            Block {
                area: kurbo::Rect::from_origin_size(origin, size).into(),
                colour: rng.random(),
            }
        })
        .collect()
}

/// Sprite kinds in the sprite-field demo.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Plant {
    /// 16 × 32.
    LargeTree,
    /// 16 × 32.
    LargeBush,
    /// 16 × 25.
    SmallTree,
    /// 16 × 16.
    SmallBush,
}

impl Plant {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LargeTree,
        Self::LargeBush,
        Self::SmallTree,
        Self::SmallBush,
    ];

    /// Sprite footprint.
    pub fn size(self) -> Size {
        match self {
            Self::LargeTree | Self::LargeBush => Size::new(16.0, 32.0),
            Self::SmallTree => Size::new(16.0, 25.0),
            Self::SmallBush => Size::new(16.0, 16.0),
        }
    }
}

/// A placed sprite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite {
    /// What to draw.
    pub plant: Plant,
    /// Placement in world space.
    pub area: Rect<f64>,
}

/// Scatter `cfg.objects` sprites of random kind.
pub fn random_sprites(rng: &mut impl Rng, cfg: &CollisionConfig) -> Vec<Sprite> {
    (0..cfg.objects)
        .map(|_| {
            let plant = Plant::ALL[rng.random_range(0..Plant::ALL.len())];
            let origin = Point::new(
                rng.random_range(0.0..cfg.world_size),
                rng.random_range(0.0..cfg.world_size),
            );
            Sprite {
                plant,
                area: kurbo::Rect::from_origin_size(origin, plant.size()).into(),
            }
        })
        .collect()
}

/// Square of side `side` centred on `center`.
pub fn selection(center: Point, side: f64) -> Rect<f64> {
    kurbo::Rect::from_center_size(center, Size::new(side, side)).into()
}

/// `steps` cell centres visited row by row across a square world,
/// alternating direction on each row.
pub fn sweep(world: f64, steps: usize) -> Vec<Point> {
    let per_row = steps.isqrt().max(1);
    let rows = steps.div_ceil(per_row).max(1);
    let cell = Size::new(world / per_row as f64, world / rows as f64);
    (0..steps)
        .map(|i| {
            let row = i / per_row;
            let col = if row % 2 == 0 {
                i % per_row
            } else {
                per_row - 1 - i % per_row
            };
            Point::new(
                (col as f64 + 0.5) * cell.width,
                (row as f64 + 0.5) * cell.height,
            )
        })
        .collect()
}

/// A random walk of `len` cells inside a `width × height` canvas.
pub fn brush_stroke(
    rng: &mut impl Rng,
    width: usize,
    height: usize,
    len: usize,
) -> Vec<(usize, usize)> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut at = (rng.random_range(0..width), rng.random_range(0..height));
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(at);
        at = match rng.random_range(0..4) {
            0 => (at.0.saturating_sub(1), at.1),
            1 => ((at.0 + 1).min(width - 1), at.1),
            2 => (at.0, at.1.saturating_sub(1)),
            _ => (at.0, (at.1 + 1).min(height - 1)),
        };
    }
    out
}
