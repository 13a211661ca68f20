//! # Slicekit
//!
//! `slicekit` is a small library of in-place slice algorithms built on index
//! arithmetic instead of auxiliary storage.
//!
//! Every function takes the caller's slice by reference, finishes in a bounded
//! number of passes, allocates nothing, and keeps no reference once it returns.
//!
//! ## Algorithms
//!
//! - **Write-cursor compaction** ([`compact`]): [`dedup_sorted`] collapses runs
//!   in sorted input; [`move_zeros_to_end`] is a stable zero partition. Both
//!   report a *logical length*, the prefix holding the result.
//! - **Two pointers** ([`two_pointer`]): [`reverse_in_place`] and
//!   [`is_palindrome`] walk from both ends towards the middle.
//! - **Sliding window** ([`window`]): [`max_window_sum`] finds the best
//!   fixed-size window in O(n), validating the window size up front.
//! - **Comparison sorts** ([`sort`](mod@sort)): [`bubble_sort`],
//!   [`adjacent_bubble_sort`], [`selection_sort`] and [`insertion_sort`], each
//!   reporting [`SortStats`].
//!
//! ## Usage
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let mut data: Vec<i32> = vec![1, 1, 2, 3, 3, 3, 4];
//! dedup_sorted_vec(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 4]);
//!
//! reverse_in_place(&mut data);
//! assert_eq!(data, vec![4, 3, 2, 1]);
//!
//! assert_eq!(max_window_sum(&data, 2).unwrap(), 7_i64);
//! assert!(max_window_sum(&data, 5).is_err());
//!
//! sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 4]);
//! ```
//!
//! ## Element types
//!
//! Most operations are generic over `PartialEq` or `Ord`. Window sums and zero
//! partitioning need the [`WindowSum`] and [`Zero`] traits, which are
//! implemented for all primitive integers and can be implemented for custom
//! numeric types.
//!
//! ## Errors
//!
//! Only the window size is validated at runtime ([`Error::InvalidArgument`]).
//! Sortedness, the precondition of [`dedup_sorted`], is a caller contract: on
//! unsorted input the result is deterministic but only adjacent duplicates
//! are removed.

pub mod compact;
pub mod core;
pub mod error;
pub mod sort;
pub mod two_pointer;
pub mod window;

pub use compact::{dedup_sorted, dedup_sorted_slice, dedup_sorted_vec, move_zeros_to_end};
pub use crate::core::{WindowSum, Zero};
pub use error::{Error, Result};
pub use sort::{
    SortAlgorithm, SortStats, adjacent_bubble_sort, adjacent_bubble_sort_by, bubble_sort,
    bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort, selection_sort_by, sort,
};
pub use two_pointer::{is_palindrome, is_palindrome_str, reverse_in_place};
pub use window::{MaxWindow, max_window, max_window_sum};

pub mod prelude {
    pub use crate::compact::{dedup_sorted, dedup_sorted_slice, dedup_sorted_vec, move_zeros_to_end};
    pub use crate::core::{WindowSum, Zero};
    pub use crate::error::{Error, Result};
    pub use crate::sort::{
        SortAlgorithm, SortStats, adjacent_bubble_sort, adjacent_bubble_sort_by, bubble_sort,
        bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort, selection_sort_by, sort,
    };
    pub use crate::two_pointer::{is_palindrome, is_palindrome_str, reverse_in_place};
    pub use crate::window::{MaxWindow, max_window, max_window_sum};
}
