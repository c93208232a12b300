// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrant_integral --heading-base-level=0

//! Quadrant Integral: summed-area tables for constant-time rectangle sums.
//!
//! - [`Grid`] is a dense row-major 2D array whose [`Grid::sample`] returns zero
//!   for any coordinate outside it.
//! - [`IntegralImage`] stores, for every cell, the sum of all source cells above
//!   and to the left of it (inclusive), and answers rectangle sums with four
//!   lookups.
//! - [`Sample`] maps each element type to a wider accumulator so sums of large
//!   images do not overflow.
//!
//! # Example
//!
//! ```rust
//! use quadrant_integral::{Grid, IntegralImage};
//!
//! let grid = Grid::from_rows(&[[1_u8; 4]; 4]).unwrap();
//! let image = IntegralImage::from_grid(&grid);
//! assert_eq!(image.region_sum((1, 1), (2, 2)), Ok(4));
//! assert_eq!(image.total(), 16);
//! ```
//!
//! Regions are inclusive on both corners. [`IntegralImage::region_sum`] rejects
//! inverted or out-of-range regions; [`IntegralImage::region_sum_spanning`]
//! accepts corners in any order and clips to the image.

#![no_std]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod integral;
pub mod sample;

pub use error::Error;
pub use grid::Grid;
pub use integral::IntegralImage;
pub use sample::Sample;
