//! Quadratic comparison sorts.
//!
//! Every sort here works in place using pairwise comparisons and
//! [`slice::swap`] only, with O(1) extra space. Each returns [`SortStats`] so
//! callers can observe how much work a given input costs.
//!
//! - [`bubble_sort`]: anchor-style exchange sort with early exit. Not stable.
//! - [`adjacent_bubble_sort`]: textbook adjacent-pair bubble sort. Stable.
//! - [`selection_sort`]: one swap per position. Not stable.
//! - [`insertion_sort`]: adjacent swaps towards the front. Stable.

use std::cmp::Ordering;

/// Work counters collected while sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of outer passes started.
    pub passes: usize,
    /// Number of times the comparator was called.
    pub comparisons: usize,
    /// Number of element swaps performed.
    pub swaps: usize,
}

/// Sorts the slice in non-decreasing order with [`bubble_sort`].
///
/// # Examples
///
/// ```
/// use slicekit::sort;
///
/// let mut data = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
/// sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 6, 7, 9, 11, 11, 12, 14]);
/// ```
pub fn sort<T: Ord>(data: &mut [T]) {
    bubble_sort(data);
}

/// Anchor-style bubble sort.
///
/// Pass `i` holds position `i` as the anchor and compares it against every
/// later element, swapping whenever the anchor is greater. At the end of the
/// pass the anchor holds the minimum of `data[i..]`.
///
/// The sort stops early after a pass that swapped nothing and found
/// `data[i + 1..]` already in order, so sorted input costs a single pass.
///
/// This sort is **not stable**: swapping the anchor across the slice can
/// reorder equal elements.
///
/// # Examples
///
/// ```
/// use slicekit::bubble_sort;
///
/// let mut data = [1, 2, 3, 4, 5];
/// let stats = bubble_sort(&mut data);
///
/// assert_eq!(stats.passes, 1);
/// assert_eq!(stats.swaps, 0);
/// ```
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> SortStats {
    bubble_sort_by(data, T::cmp)
}

/// Anchor-style bubble sort with a custom comparator.
///
/// See [`bubble_sort`].
pub fn bubble_sort_by<T, F>(data: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();
    let len = data.len();
    if len < 2 {
        return stats;
    }

    // The last position has nothing left to compare against.
    for i in 0..len - 1 {
        stats.passes += 1;
        let mut swapped = false;
        let mut suffix_sorted = true;

        for j in i + 1..len {
            stats.comparisons += 1;
            if compare(&data[i], &data[j]) == Ordering::Greater {
                data.swap(i, j);
                stats.swaps += 1;
                swapped = true;
            }

            // Only matters while the pass is clean. The pair (i, i + 1) is
            // already covered by the anchor comparison.
            if !swapped && suffix_sorted && j > i + 1 {
                stats.comparisons += 1;
                if compare(&data[j - 1], &data[j]) == Ordering::Greater {
                    suffix_sorted = false;
                }
            }
        }

        if !swapped && suffix_sorted {
            break;
        }
    }

    stats
}

/// Textbook bubble sort over adjacent pairs.
///
/// Pass `i` bubbles the largest element of `data[..len - i]` to the end and
/// the sort stops after the first pass without a swap. Stable.
///
/// ```
/// use slicekit::adjacent_bubble_sort;
///
/// let mut data = [5, 1, 4, 2, 8];
/// adjacent_bubble_sort(&mut data);
/// assert_eq!(data, [1, 2, 4, 5, 8]);
/// ```
pub fn adjacent_bubble_sort<T: Ord>(data: &mut [T]) -> SortStats {
    adjacent_bubble_sort_by(data, T::cmp)
}

/// Adjacent-pair bubble sort with a custom comparator.
pub fn adjacent_bubble_sort_by<T, F>(data: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();
    let len = data.len();

    for i in 0..len.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..len - 1 - i {
            stats.comparisons += 1;
            if compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    stats
}

/// Selection sort.
///
/// For each position, finds the minimum of the unsorted remainder and swaps
/// it into place. Performs at most `len - 1` swaps, but always
/// `len * (len - 1) / 2` comparisons. Not stable.
///
/// ```
/// use slicekit::selection_sort;
///
/// let mut data = [64, 25, 12, 22, 11];
/// let stats = selection_sort(&mut data);
///
/// assert_eq!(data, [11, 12, 22, 25, 64]);
/// assert_eq!(stats.comparisons, 10);
/// ```
pub fn selection_sort<T: Ord>(data: &mut [T]) -> SortStats {
    selection_sort_by(data, T::cmp)
}

/// Selection sort with a custom comparator.
pub fn selection_sort_by<T, F>(data: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();
    let len = data.len();

    for i in 0..len.saturating_sub(1) {
        stats.passes += 1;
        let mut min_index = i;
        for j in i + 1..len {
            stats.comparisons += 1;
            if compare(&data[j], &data[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            data.swap(i, min_index);
            stats.swaps += 1;
        }
    }

    stats
}

/// Insertion sort.
///
/// Grows a sorted prefix one element at a time, moving each new element
/// towards the front with adjacent swaps until its predecessor is not
/// greater. Stable, and linear on already-sorted input.
///
/// ```
/// use slicekit::insertion_sort;
///
/// let mut data = [64, 34, 25, 12, 22, 11, 90, 5];
/// insertion_sort(&mut data);
/// assert_eq!(data, [5, 11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn insertion_sort<T: Ord>(data: &mut [T]) -> SortStats {
    insertion_sort_by(data, T::cmp)
}

/// Insertion sort with a custom comparator.
pub fn insertion_sort_by<T, F>(data: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();

    for i in 1..data.len() {
        stats.passes += 1;
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if compare(&data[j - 1], &data[j]) != Ordering::Greater {
                break;
            }
            data.swap(j - 1, j);
            stats.swaps += 1;
            j -= 1;
        }
    }

    stats
}

/// The sorts provided by this module, for callers that pick one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Anchor-style exchange sort, see [`bubble_sort`].
    Bubble,
    /// Adjacent-pair bubble sort, see [`adjacent_bubble_sort`].
    AdjacentBubble,
    /// See [`selection_sort`].
    Selection,
    /// See [`insertion_sort`].
    Insertion,
}

/// Every [`SortAlgorithm`], in declaration order.
pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::AdjacentBubble,
    SortAlgorithm::Selection,
    SortAlgorithm::Insertion,
];

impl SortAlgorithm {
    /// Name of the sort function this variant dispatches to.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble_sort",
            Self::AdjacentBubble => "adjacent_bubble_sort",
            Self::Selection => "selection_sort",
            Self::Insertion => "insertion_sort",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::AdjacentBubble | Self::Insertion)
    }

    /// Sorts `data` in ascending order with this algorithm.
    pub fn sort<T: Ord>(self, data: &mut [T]) -> SortStats {
        self.sort_by(data, T::cmp)
    }

    /// Sorts `data` with this algorithm and a comparator.
    pub fn sort_by<T, F>(self, data: &mut [T], compare: F) -> SortStats
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Self::Bubble => bubble_sort_by(data, compare),
            Self::AdjacentBubble => adjacent_bubble_sort_by(data, compare),
            Self::Selection => selection_sort_by(data, compare),
            Self::Insertion => insertion_sort_by(data, compare),
        }
    }
}
