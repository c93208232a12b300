// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters shared by [`QuadTree`](crate::QuadTree) and
//! [`QuadTreeContainer`](crate::QuadTreeContainer).

use crate::error::Error;
use crate::types::{Rect, Scalar};

/// Tree construction parameters.
///
/// With the `serde` feature this can be embedded in application config files.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig<T> {
    /// Area covered by the root node.
    pub area: Rect<T>,
    /// Level label of the root node. Informational only; children get `level + 1`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: usize,
    /// How many levels below the root a subdivision may go.
    ///
    /// Items whose rectangle would descend past this depth are kept at the
    /// node reached at the cap. Zero disables subdivision entirely.
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    pub max_depth: usize,
}

#[cfg(feature = "serde")]
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Default subdivision cap.
///
/// Twenty halvings of a 10,000-unit world still give cells of about 0.01 units.
pub const DEFAULT_MAX_DEPTH: usize = 20;

impl<T: Scalar> TreeConfig<T> {
    /// Config for `area` at level 0 with the default depth cap.
    pub fn new(area: Rect<T>) -> Self {
        Self {
            area,
            level: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the root level label.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Set the subdivision cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reject areas with negative or NaN extents.
    pub fn validate(&self) -> Result<(), Error> {
        if self.area.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidArea)
        }
    }
}
