// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the headless Quadrant demos.
//!
//! Each demo under `examples/` replays what an interactive session would do,
//! driven by a seeded RNG instead of a mouse, and logs what it finds.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example quadtrees`
//! - `cargo run -p quadrant_demos --example collision_quadtrees`
//! - `cargo run -p quadrant_demos --example integral_images`
//!
//! Pass a TOML file path as the first argument to override [`DemoConfig`].

pub mod config;
pub mod scene;

pub use config::DemoConfig;

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
