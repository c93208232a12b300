// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major 2D grid with zero-sentinel sampling.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;

/// A dense `width × height` grid stored row-major.
///
/// [`Grid::sample`] treats every coordinate outside the grid, including negative
/// ones, as holding `T::default()`. Prefix-sum recurrences rely on that to avoid
/// edge cases at row and column zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Copy + Default> Grid<T> {
    /// A grid filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Wrap row-major `data`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from equal-length rows. The first row fixes the width.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::SizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell at `(x, y)`, if inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Mutable cell at `(x, y)`, if inside the grid.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.data[i])
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), Error> {
        let (width, height) = (self.width, self.height);
        let cell = self
            .get_mut(x, y)
            .ok_or(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *cell = value;
        Ok(())
    }

    /// Cell at `(x, y)`, or `T::default()` anywhere outside the grid.
    #[inline]
    pub fn sample(&self, x: isize, y: isize) -> T {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y).unwrap_or_default(),
            _ => T::default(),
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Resize to `width × height` and zero every cell, keeping the allocation.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.data.clear();
        self.data.resize(width * height, T::default());
        self.width = width;
        self.height = height;
    }

    /// Cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `y`, if inside the grid.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        (y < self.height).then(|| &self.data[y * self.width..(y + 1) * self.width])
    }
}
