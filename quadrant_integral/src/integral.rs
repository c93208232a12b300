// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summed-area table over a [`Grid`].

use tracing::{debug, trace};

use crate::error::Error;
use crate::grid::Grid;
use crate::sample::Sample;

/// Inclusive prefix sums of a source grid.
///
/// Cell `(x, y)` of [`IntegralImage::sums`] holds the sum of every source cell
/// `(i, j)` with `i <= x` and `j <= y`. Once built, any axis-aligned rectangle of
/// the source can be summed with four lookups.
///
/// The image does not track its source. After the source changes, call
/// [`IntegralImage::calculate_sums`] again.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegralImage<S: Sample> {
    sums: Grid<S::Acc>,
}

impl<S: Sample> Default for IntegralImage<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sample> IntegralImage<S> {
    /// An empty `0 × 0` image.
    pub fn new() -> Self {
        Self {
            sums: Grid::new(0, 0),
        }
    }

    /// Build the prefix sums of `source`.
    pub fn from_grid(source: &Grid<S>) -> Self {
        let mut image = Self::new();
        image.calculate_sums(source);
        image
    }

    /// Recompute every prefix sum from `source`, adopting its dimensions.
    pub fn calculate_sums(&mut self, source: &Grid<S>) {
        let (width, height) = (source.width(), source.height());
        debug!(width, height, "calculating integral image");
        self.sums.reset(width, height);
        for y in 0..height {
            let yi = y as isize;
            for x in 0..width {
                let xi = x as isize;
                let value = source.sample(xi, yi).widen();
                let s = &self.sums;
                let sum = value
                    + s.sample(xi - 1, yi)
                    + (s.sample(xi, yi - 1) - s.sample(xi - 1, yi - 1));
                if let Some(cell) = self.sums.get_mut(x, y) {
                    *cell = sum;
                }
            }
        }
    }

    /// Sum of the source cells in the inclusive rectangle `start..=end`.
    ///
    /// `start` is the top-left `(x, y)` corner and `end` the bottom-right one.
    /// A single-cell region has `start == end`.
    pub fn region_sum(&self, start: (usize, usize), end: (usize, usize)) -> Result<S::Acc, Error> {
        if start.0 > end.0 || start.1 > end.1 {
            return Err(Error::InvertedRange { start, end });
        }
        let (width, height) = (self.width(), self.height());
        if end.0 >= width || end.1 >= height {
            return Err(Error::OutOfBounds {
                x: end.0,
                y: end.1,
                width,
                height,
            });
        }
        Ok(self.sum_inclusive(start, end))
    }

    /// Sum of the source cells in the rectangle spanned by two corners.
    ///
    /// The corners may be given in any order and may lie outside the image;
    /// only the part of the rectangle inside the image counts. Returns zero when
    /// nothing of the rectangle lies inside.
    pub fn region_sum_spanning(&self, a: (usize, usize), b: (usize, usize)) -> S::Acc {
        let (width, height) = (self.width(), self.height());
        let min = (a.0.min(b.0), a.1.min(b.1));
        if min.0 >= width || min.1 >= height {
            trace!(?a, ?b, width, height, "region lies outside the image");
            return S::Acc::default();
        }
        let max = (a.0.max(b.0).min(width - 1), a.1.max(b.1).min(height - 1));
        self.sum_inclusive(min, max)
    }

    /// Sum of every source cell.
    pub fn total(&self) -> S::Acc {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return S::Acc::default();
        }
        self.sum_inclusive((0, 0), (w - 1, h - 1))
    }

    /// Four-lookup rectangle sum. Callers guarantee `start <= end < size`.
    ///
    /// Differences are taken before the final subtraction so unsigned
    /// accumulators never go below zero mid-expression.
    #[inline]
    fn sum_inclusive(&self, start: (usize, usize), end: (usize, usize)) -> S::Acc {
        let (x0, y0) = (start.0 as isize - 1, start.1 as isize - 1);
        let (x1, y1) = (end.0 as isize, end.1 as isize);
        let s = &self.sums;
        (s.sample(x1, y1) - s.sample(x0, y1)) - (s.sample(x1, y0) - s.sample(x0, y0))
    }

    /// Width of the summed grid.
    pub fn width(&self) -> usize {
        self.sums.width()
    }

    /// Height of the summed grid.
    pub fn height(&self) -> usize {
        self.sums.height()
    }

    /// The prefix sums themselves.
    pub fn sums(&self) -> &Grid<S::Acc> {
        &self.sums
    }
}
