// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for grid access and region queries.

use thiserror::Error;

/// Errors reported by [`Grid`](crate::Grid) and [`IntegralImage`](crate::IntegralImage).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A cell coordinate past the grid's extent.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Column that was addressed.
        x: usize,
        /// Row that was addressed.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// A region whose start is right of or below its end.
    #[error("region start {start:?} is not above-left of end {end:?}")]
    InvertedRange {
        /// Requested top-left corner.
        start: (usize, usize),
        /// Requested bottom-right corner.
        end: (usize, usize),
    },

    /// Backing data whose length does not match the requested dimensions.
    #[error("expected {expected} cells, got {actual}")]
    SizeMismatch {
        /// Cells implied by the dimensions.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },
}
