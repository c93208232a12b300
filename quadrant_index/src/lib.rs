// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrant_index --heading-base-level=0

//! Quadrant Index: a region quad-tree with a stable-handle item store.
//!
//! - [`QuadTree`] partitions an area into quadrants on demand and stores each
//!   `(handle, rectangle)` pair at the deepest node whose area contains the
//!   rectangle but none of whose quadrants does.
//! - [`QuadTreeContainer`] owns the user values, hands out generational [`Key`]s,
//!   and remembers where the tree placed each item so removal is O(1).
//! - Area queries prune quadrants that do not overlap the query and bulk-collect
//!   quadrants the query covers completely.
//!
//! It is generic over the coordinate scalar (`f32`, `f64`, `i64`) and does not
//! depend on any geometry crate; the `kurbo` feature adds conversions for callers
//! that already use Kurbo rectangles.
//!
//! # Example
//!
//! ```rust
//! use quadrant_index::{QuadTreeContainer, Rect};
//!
//! let mut world: QuadTreeContainer<f32, &str> =
//!     QuadTreeContainer::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let tree = world.insert("tree", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
//! let bush = world.insert("bush", Rect::from_xywh(50.0, 50.0, 10.0, 10.0));
//!
//! // Query an area and remove everything it touches.
//! let hits = world.find(&Rect::from_xywh(0.0, 0.0, 20.0, 20.0));
//! assert_eq!(hits, [tree]);
//! for key in hits {
//!     world.remove(key);
//! }
//! assert_eq!(world.len(), 1);
//! assert_eq!(world.get(bush), Some(&"bush"));
//! ```
//!
//! The bare tree can be used on its own when the handles are plain values:
//!
//! ```rust
//! use quadrant_index::{QuadTree, Rect};
//!
//! let mut tree: QuadTree<i64, u32> = QuadTree::new(Rect::new(0, 0, 1024, 1024));
//! tree.insert(1, Rect::new(10, 10, 20, 20));
//! tree.insert(2, Rect::new(500, 500, 600, 600));
//! assert_eq!(tree.find(&Rect::new(0, 0, 100, 100)), [1]);
//! assert!(tree.remove(&2));
//! ```
//!
//! ## Geometry
//!
//! Containment is inclusive: a rectangle lying exactly on a quadrant boundary is
//! pushed into that quadrant. Overlap is the half-open separating-axis test, so
//! rectangles that only share an edge do not overlap.
//!
//! ## Depth cap
//!
//! Placement is driven purely by geometry, which means a zero-size rectangle
//! would subdivide forever. [`TreeConfig::max_depth`] (default
//! [`DEFAULT_MAX_DEPTH`]) bounds the number of levels below the root; items are
//! kept at the node reached at the cap.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates.
//! [`TreeConfig::validate`] rejects NaN or inverted tree areas.

#![no_std]

extern crate alloc;

pub mod config;
pub mod container;
pub mod error;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_MAX_DEPTH, TreeConfig};
pub use container::{Key, QuadTreeContainer};
pub use error::Error;
pub use tree::{Location, NodeId, QuadTree, Removal};
pub use types::{Rect, Scalar};
