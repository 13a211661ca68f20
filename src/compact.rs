//! Write-cursor compaction.
//!
//! Both operations scan the slice once with a read cursor and copy the elements
//! worth keeping down to a trailing write cursor. The write cursor never passes
//! the read cursor, so no element is overwritten before it has been read.
//!
//! The write cursor's final position is the *logical length* of the result:
//! the storage length of the slice never changes.

use crate::core::Zero;

/// Collapses runs of equal elements in a sorted slice, keeping the first of each run.
///
/// After the call `data[..n]` holds every distinct value of the input in its
/// original order, where `n` is the returned logical length. Elements in
/// `data[n..]` are left in an unspecified state.
///
/// The input must be sorted in non-decreasing order. This is not checked:
/// on unsorted input only adjacent duplicates are collapsed, deterministically.
///
/// # Examples
///
/// ```
/// use slicekit::dedup_sorted;
///
/// let mut data = [1, 1, 1, 2, 3, 3, 4, 5, 5];
/// let len = dedup_sorted(&mut data);
///
/// assert_eq!(len, 5);
/// assert_eq!(&data[..len], &[1, 2, 3, 4, 5]);
/// ```
pub fn dedup_sorted<T: PartialEq + Clone>(data: &mut [T]) -> usize {
    if data.is_empty() {
        return 0;
    }

    // The first element always survives.
    let mut write = 1;
    for read in 1..data.len() {
        // Writes land strictly below the read cursor, so data[read - 1]
        // still holds its original value.
        if data[read] != data[read - 1] {
            if write != read {
                data[write] = data[read].clone();
            }
            write += 1;
        }
    }
    write
}

/// Deduplicates a sorted slice and returns the distinct prefix.
///
/// Same pass as [`dedup_sorted`], but hands back `&mut data[..n]` instead of `n`.
///
/// ```
/// use slicekit::dedup_sorted_slice;
///
/// let mut data = ['a', 'a', 'b', 'c', 'c'];
/// assert_eq!(dedup_sorted_slice(&mut data), &['a', 'b', 'c']);
/// ```
pub fn dedup_sorted_slice<T: PartialEq + Clone>(data: &mut [T]) -> &mut [T] {
    let len = dedup_sorted(data);
    &mut data[..len]
}

/// Deduplicates a sorted vector and truncates it to its distinct prefix.
///
/// ```
/// use slicekit::dedup_sorted_vec;
///
/// let mut data = vec![1, 1, 2, 2, 3, 4, 4, 5];
/// dedup_sorted_vec(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn dedup_sorted_vec<T: PartialEq + Clone>(data: &mut Vec<T>) {
    let len = dedup_sorted(data);
    data.truncate(len);
}

/// Moves every zero to the end of the slice, keeping non-zero elements in order.
///
/// This is a stable partition: non-zero elements are copied forward in the
/// order they are encountered, then the tail is filled with [`Zero::ZERO`].
/// Runs in O(n) time with O(1) extra space.
///
/// Returns the number of non-zero elements, i.e. the index where the zeros begin.
///
/// # Examples
///
/// ```
/// use slicekit::move_zeros_to_end;
///
/// let mut data = [0, 1, 2, 0, 3, 4];
/// let non_zero = move_zeros_to_end(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 4, 0, 0]);
/// assert_eq!(non_zero, 4);
/// ```
pub fn move_zeros_to_end<T: Zero>(data: &mut [T]) -> usize {
    let mut write = 0;
    for read in 0..data.len() {
        let value = data[read];
        if !value.is_zero() {
            data[write] = value;
            write += 1;
        }
    }

    data[write..].fill(T::ZERO);
    write
}
