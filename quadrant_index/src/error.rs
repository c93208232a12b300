// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for container and configuration operations.

use thiserror::Error;

use crate::container::Key;

/// Errors reported by [`QuadTreeContainer`](crate::QuadTreeContainer) and
/// [`TreeConfig`](crate::TreeConfig).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The key does not refer to a live item (never issued, or already removed).
    #[error("key {0:?} does not refer to a live item")]
    NotFound(Key),

    /// A tree area with negative or NaN width/height.
    #[error("tree area must have non-negative, non-NaN width and height")]
    InvalidArea,
}
