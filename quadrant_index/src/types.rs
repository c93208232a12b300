// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and the containment/overlap predicates.

use core::fmt::Debug;

/// Axis-aligned rectangle in 2D, stored as min/max corners.
///
/// Use [`Rect::from_xywh`] to build one from a position and a size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Rect<T> {
    /// Create a new rectangle from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from its top-left position and its size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: T::add(x, w),
            max_y: T::add(y, h),
        }
    }

    /// Left edge.
    #[inline]
    pub fn x(&self) -> T {
        self.min_x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> T {
        self.min_y
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// Whether width and height are both non-negative.
    ///
    /// Returns false for NaN extents.
    pub fn is_valid(&self) -> bool {
        self.width() >= T::zero() && self.height() >= T::zero()
    }

    /// Whether `other` lies entirely within `self`, boundaries included.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Whether the two rectangles share interior area.
    ///
    /// This is the half-open separating-axis test: rectangles that merely touch
    /// along an edge do not overlap. A zero-area rectangle overlaps rectangles
    /// that strictly surround it, but never itself or anything it only touches.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.min_x >= other.max_x
            || other.min_x >= self.max_x
            || self.min_y >= other.max_y
            || other.min_y >= self.max_y)
    }

    /// Whether the point lies within the rectangle, boundaries included.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.min_x <= x && self.min_y <= y && x <= self.max_x && y <= self.max_y
    }

    /// Split at the midpoint of both axes.
    ///
    /// Order is fixed: north-west, north-east, south-west, south-east.
    pub fn quadrants(&self) -> [Self; 4] {
        let cx = T::mid(self.min_x, self.max_x);
        let cy = T::mid(self.min_y, self.max_y);
        [
            Self::new(self.min_x, self.min_y, cx, cy),
            Self::new(cx, self.min_y, self.max_x, cy),
            Self::new(self.min_x, cy, cx, self.max_y),
            Self::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

/// Numeric coordinate abstraction for [`Rect`] and the tree.
///
/// Only the handful of operations needed to build rectangles and split them
/// into quadrants.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Midpoint between a and b (the quadrant split line).
    fn mid(a: Self, b: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }
}
