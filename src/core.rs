//! Element traits shared by the slice algorithms.
//!
//! This module defines:
//! - [`WindowSum`]: Elements that can be summed over a sliding window in a widened accumulator.
//! - [`Zero`]: Elements with a distinguished zero value, used by zero-partitioning.
//!
//! Both are implemented for every primitive integer type. Downstream crates can
//! implement them for their own numeric newtypes.

use std::ops::{Add, Sub};

/// An element type whose values can be accumulated over a sliding window.
///
/// Sums are carried in a wider accumulator type ([`WindowSum::Acc`]) so that a
/// window of `k` elements does not overflow where the element type would.
/// `i32` accumulates in `i64`, `u64` in `u128`, and so on.
///
/// `i128` and `u128` have no wider type and accumulate in themselves, so for
/// them every window sum must fit in the element type.
///
/// # Examples
///
/// Implementing for a custom newtype:
///
/// ```
/// use slicekit::core::WindowSum;
///
/// #[derive(Clone, Copy)]
/// struct Cents(u32);
///
/// impl WindowSum for Cents {
///     type Acc = u64;
///
///     fn widen(self) -> u64 {
///         u64::from(self.0)
///     }
/// }
///
/// let sales = [Cents(250), Cents(100), Cents(900), Cents(50)];
/// assert_eq!(slicekit::max_window_sum(&sales, 2).unwrap(), 1000);
/// ```
pub trait WindowSum: Copy {
    /// Accumulator type for window sums.
    ///
    /// It must represent the sum of any window of the slice being scanned.
    type Acc: Copy + Ord + Add<Output = Self::Acc> + Sub<Output = Self::Acc>;

    /// Converts the element into the accumulator type.
    fn widen(self) -> Self::Acc;
}

/// An element type with a zero value.
///
/// [`move_zeros_to_end`](crate::compact::move_zeros_to_end) moves every element
/// equal to [`Zero::ZERO`] behind the non-zero ones.
pub trait Zero: Copy + PartialEq {
    /// The zero value.
    const ZERO: Self;

    /// Returns `true` if the value equals [`Zero::ZERO`].
    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

macro_rules! impl_integer {
    ($($elem:ty => $acc:ty),* $(,)?) => {
        $(
            impl WindowSum for $elem {
                type Acc = $acc;

                #[inline(always)]
                fn widen(self) -> $acc {
                    self as $acc
                }
            }

            impl Zero for $elem {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_integer! {
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    isize => i128,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    usize => u128,
}

// 128-bit integers have no wider type; the accumulator matches the element.
impl WindowSum for i128 {
    type Acc = i128;

    #[inline(always)]
    fn widen(self) -> i128 {
        self
    }
}

impl WindowSum for u128 {
    type Acc = u128;

    #[inline(always)]
    fn widen(self) -> u128 {
        self
    }
}

impl Zero for i128 {
    const ZERO: Self = 0;
}

impl Zero for u128 {
    const ZERO: Self = 0;
}
