//! Fixed-size sliding windows.
//!
//! The window sum is maintained incrementally: when the window advances by one
//! position the element leaving on the left is subtracted and the element
//! entering on the right is added. Every element is therefore touched at most
//! twice, O(n) overall instead of O(n * k) for summing each window from scratch.

use crate::core::WindowSum;
use crate::error::{Error, Result};

/// The best window found by [`max_window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxWindow<A> {
    /// Index of the first element of the window.
    pub start: usize,
    /// Number of elements in the window.
    pub len: usize,
    /// Sum of the window's elements.
    pub sum: A,
}

impl<A> MaxWindow<A> {
    /// Index range of the window within the scanned slice.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Finds the contiguous window of `k` elements with the largest sum.
///
/// When several windows share the maximum sum, the leftmost one is returned.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `1 <= k <= data.len()`. In
/// particular every `k` is rejected for an empty slice.
///
/// # Examples
///
/// ```
/// use slicekit::max_window;
///
/// let data = [2i32, 1, 5, 1, 3, 2];
/// let best = max_window(&data, 3).unwrap();
///
/// assert_eq!(best.sum, 9_i64);
/// assert_eq!(&data[best.range()], &[5, 1, 3]);
/// ```
pub fn max_window<T: WindowSum>(data: &[T], k: usize) -> Result<MaxWindow<T::Acc>> {
    validate_window(k, data.len())?;

    // k >= 1, so the first window has a first element to seed the sum with.
    let (head, tail) = data.split_at(k);
    let mut window_sum = head[1..]
        .iter()
        .fold(head[0].widen(), |acc, &x| acc + x.widen());
    let mut best = MaxWindow {
        start: 0,
        len: k,
        sum: window_sum,
    };

    // `tail[i]` enters the window while `data[i]` leaves it.
    for (i, &entering) in tail.iter().enumerate() {
        // Subtract before adding. The leaving element is part of the current
        // sum, so the intermediate is itself a partial window sum and fits
        // whenever every window sum does, signed or unsigned.
        window_sum = window_sum - data[i].widen() + entering.widen();
        if window_sum > best.sum {
            best.sum = window_sum;
            best.start = i + 1;
        }
    }

    Ok(best)
}

/// Returns the largest sum of any `k` contiguous elements.
///
/// Shorthand for [`max_window`] when only the sum is needed.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `1 <= k <= data.len()`.
///
/// # Examples
///
/// ```
/// use slicekit::max_window_sum;
///
/// assert_eq!(max_window_sum(&[2i32, 1, 5, 1, 3, 2], 3).unwrap(), 9_i64);
/// assert!(max_window_sum(&[2i32, 1, 5], 0).is_err());
/// assert!(max_window_sum(&[2i32, 1, 5], 4).is_err());
/// ```
pub fn max_window_sum<T: WindowSum>(data: &[T], k: usize) -> Result<T::Acc> {
    max_window(data, k).map(|window| window.sum)
}

fn validate_window(k: usize, len: usize) -> Result<()> {
    if k == 0 || k > len {
        return Err(Error::InvalidArgument {
            param: "k",
            value: k,
            constraint: if len == 0 {
                "window size must be at least 1 and the slice is empty".to_string()
            } else {
                format!("window size must be in 1..={len}")
            },
        });
    }
    Ok(())
}
