use slicekit::SortAlgorithm;
use slicekit::sort::ALL_ALGORITHMS;
use slicekit::{SortStats, bubble_sort, bubble_sort_by, insertion_sort, selection_sort};
use std::cmp::Reverse;

const SAMPLE: [i32; 10] = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
const SORTED_SAMPLE: [i32; 10] = [1, 2, 3, 6, 7, 9, 11, 11, 12, 14];

#[test]
fn test_all_algorithms_sort_sample() {
    for algo in ALL_ALGORITHMS {
        let mut data = SAMPLE;
        algo.sort(&mut data);
        assert_eq!(data, SORTED_SAMPLE, "{} failed", algo.name());
    }
}

#[test]
fn test_empty_and_single_do_no_work() {
    for algo in ALL_ALGORITHMS {
        let mut empty: [i32; 0] = [];
        assert_eq!(algo.sort(&mut empty), SortStats::default(), "{}", algo.name());

        let mut single = [5];
        let stats = algo.sort(&mut single);
        assert_eq!(stats.swaps, 0, "{}", algo.name());
        assert_eq!(stats.comparisons, 0, "{}", algo.name());
        assert_eq!(single, [5]);
    }
}

#[test]
fn test_bubble_sort_sorted_input_stops_after_first_pass() {
    let mut data: Vec<u32> = (0..100).collect();
    let stats = bubble_sort(&mut data);

    assert_eq!(stats.passes, 1);
    assert_eq!(stats.swaps, 0);
    // 99 anchor comparisons plus 98 suffix-order checks.
    assert_eq!(stats.comparisons, 99 + 98);
    assert!(data.iter().copied().eq(0..100));
}

#[test]
fn test_bubble_sort_compares_anchor_against_later_elements() {
    // Pass 0: anchor 3 swaps with 2, then the new anchor 2 swaps with 1.
    // Pass 1: anchor 3 swaps with 2.
    let mut data = [3, 2, 1];
    let stats = bubble_sort(&mut data);

    assert_eq!(data, [1, 2, 3]);
    assert_eq!(
        stats,
        SortStats {
            passes: 2,
            comparisons: 3,
            swaps: 3,
        }
    );
}

#[test]
fn test_bubble_sort_does_not_stop_on_clean_anchor_pass() {
    // The first pass swaps nothing (1 is already the minimum) but the
    // remainder is out of order, so sorting must continue.
    let mut data = [1, 3, 2];
    bubble_sort(&mut data);
    assert_eq!(data, [1, 2, 3]);

    let mut data = [1, 2, 5, 4, 3];
    bubble_sort(&mut data);
    assert_eq!(data, [1, 2, 3, 4, 5]);
}

#[test]
fn test_bubble_sort_is_not_stable() {
    // Sorting by key only; the tag records the original position.
    let mut data = [(2, 'a'), (2, 'b'), (1, 'c')];
    bubble_sort_by(&mut data, |x, y| x.0.cmp(&y.0));

    // The anchor (2, 'a') is swapped behind (2, 'b').
    assert_eq!(data, [(1, 'c'), (2, 'b'), (2, 'a')]);
}

#[test]
fn test_stable_algorithms_preserve_order_of_equal_keys() {
    for algo in ALL_ALGORITHMS.into_iter().filter(|a| a.is_stable()) {
        let mut data = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        algo.sort_by(&mut data, |x, y| x.0.cmp(&y.0));
        assert_eq!(
            data,
            [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')],
            "{} is not stable",
            algo.name()
        );
    }
}

#[test]
fn test_custom_comparator_descending() {
    for algo in ALL_ALGORITHMS {
        let mut data = SAMPLE;
        algo.sort_by(&mut data, |a, b| b.cmp(a));

        let mut expected = SORTED_SAMPLE;
        expected.reverse();
        assert_eq!(data, expected, "{} failed", algo.name());
    }
}

#[test]
fn test_bubble_sort_reverse_ordering() {
    let mut data = vec![Reverse(3), Reverse(1), Reverse(2)];
    bubble_sort(&mut data);
    assert_eq!(data, vec![Reverse(3), Reverse(2), Reverse(1)]);
}

#[test]
fn test_selection_sort_counts() {
    let mut data = [64, 25, 12, 22, 11];
    let stats = selection_sort(&mut data);

    assert_eq!(data, [11, 12, 22, 25, 64]);
    assert_eq!(stats.passes, 4);
    assert_eq!(stats.comparisons, 10);
    // 64<->11, then 25<->12, then 25<->22; 25 is in place after that.
    assert_eq!(stats.swaps, 3);
}

#[test]
fn test_insertion_sort_linear_on_sorted_input() {
    let mut data: Vec<i64> = (0..1000).collect();
    let stats = insertion_sort(&mut data);

    assert_eq!(stats.comparisons, 999);
    assert_eq!(stats.swaps, 0);
}

#[test]
fn test_insertion_sort_reversed_input_swaps_every_inversion() {
    let mut data: Vec<i64> = (0..50).rev().collect();
    let stats = insertion_sort(&mut data);

    assert!(data.iter().copied().eq(0..50));
    assert_eq!(stats.swaps, 50 * 49 / 2);
}

#[test]
fn test_adjacent_bubble_sort_early_exit() {
    let mut data = [1, 2, 3, 5, 4];
    let stats = SortAlgorithm::AdjacentBubble.sort(&mut data);

    assert_eq!(data, [1, 2, 3, 4, 5]);
    // One pass to fix 5/4, one clean pass to confirm.
    assert_eq!(stats.passes, 2);
    assert_eq!(stats.swaps, 1);
}

#[test]
fn test_algorithm_names_are_unique() {
    let mut names: Vec<&str> = ALL_ALGORITHMS.iter().map(|a| a.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL_ALGORITHMS.len());
}
