// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo configuration.

use std::path::Path;

use quadrant_index::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Root configuration for every demo.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Seed for all generated scene data.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Rectangle sweep demo.
    #[serde(default)]
    pub quadtrees: QuadTreesConfig,
    /// Sprite field demo.
    #[serde(default)]
    pub collision: CollisionConfig,
    /// Integral image canvas demo.
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl DemoConfig {
    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            info!(path = %path.display(), "loaded demo config");
            Ok(config)
        } else {
            info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from the path given as the first command-line argument, or
    /// `quadrant_demos.toml` in the working directory.
    pub fn from_args() -> anyhow::Result<Self> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| "quadrant_demos.toml".into());
        Self::load(Path::new(&path))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            quadtrees: QuadTreesConfig::default(),
            collision: CollisionConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

/// Random rectangles swept by a selection that removes what it touches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuadTreesConfig {
    /// Side of the square world.
    pub world_size: f64,
    /// Number of rectangles to scatter.
    pub objects: usize,
    /// Smallest rectangle side.
    pub min_size: f64,
    /// Largest rectangle side.
    pub max_size: f64,
    /// Side of the square selection area.
    pub search_area_size: f64,
    /// Number of selection positions along the sweep.
    pub sweep_steps: usize,
    /// Subdivision cap for the tree.
    pub max_depth: usize,
}

impl Default for QuadTreesConfig {
    fn default() -> Self {
        Self {
            world_size: 10_000.0,
            objects: 10_000,
            min_size: 10.0,
            max_size: 100.0,
            search_area_size: 100.0,
            sweep_steps: 400,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A field of fixed-size sprites looked up by viewport.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Side of the square world.
    pub world_size: f64,
    /// Number of sprites.
    pub objects: usize,
    /// Viewport width in world units.
    pub viewport_width: f64,
    /// Viewport height in world units.
    pub viewport_height: f64,
    /// Number of random viewport positions to visit.
    pub pans: usize,
    /// Side of the square "clearing" removed at each pan position.
    pub clear_size: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            world_size: 25_000.0,
            objects: 100_000,
            viewport_width: 1280.0,
            viewport_height: 960.0,
            pans: 50,
            clear_size: 200.0,
        }
    }
}

/// A 0/1 canvas painted by random brush strokes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas columns.
    pub width: usize,
    /// Canvas rows.
    pub height: usize,
    /// Number of brush strokes.
    pub strokes: usize,
    /// Cells visited by each stroke.
    pub stroke_length: usize,
    /// Chance that a stroke erases instead of paints.
    pub erase_probability: f64,
    /// Number of random region selections to report.
    pub selections: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 120,
            strokes: 60,
            stroke_length: 40,
            erase_probability: 0.2,
            selections: 8,
        }
    }
}

fn default_seed() -> u64 {
    0x5eed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: DemoConfig = toml::from_str(
            r#"
            seed = 7

            [quadtrees]
            objects = 500

            [canvas]
            width = 32
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.quadtrees.objects, 500);
        assert_eq!(cfg.quadtrees.world_size, 10_000.0);
        assert_eq!(cfg.canvas.width, 32);
        assert_eq!(cfg.canvas.height, 120);
        assert_eq!(cfg.collision, CollisionConfig::default());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&DemoConfig::default()).unwrap();
        let back: DemoConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, DemoConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = DemoConfig::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(cfg, DemoConfig::default());
    }
}
