// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid element types and their widened accumulators.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// A grid element that can be summed.
///
/// Sums are kept in a wider accumulator type (`u8`→`u64`, `i32`→`i64`,
/// `i64`→`i128`, `f32`→`f64`) so a full-image sum cannot overflow the sample type.
pub trait Sample: Copy + Default + Debug {
    /// Widened accumulator type used for prefix sums.
    type Acc: Copy
        + Default
        + PartialEq
        + Add<Output = Self::Acc>
        + Sub<Output = Self::Acc>
        + Debug;

    /// Convert a sample to the accumulator type.
    fn widen(self) -> Self::Acc;
}

macro_rules! impl_sample {
    ($($t:ty => $acc:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Acc = $acc;

                #[inline]
                fn widen(self) -> Self::Acc {
                    <$acc>::from(self)
                }
            }
        )*
    };
}

impl_sample!(
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    f32 => f64,
    f64 => f64,
);
