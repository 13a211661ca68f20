//! Converging two-pointer scans.
//!
//! A left cursor starts at the front, a right cursor at the back, and both move
//! inward one step at a time until they meet or cross. For a slice of length
//! `n` that is `n / 2` steps; the middle element of an odd-length slice is
//! never visited.

/// Reverses the slice in place by swapping mirrored pairs.
///
/// Slices of length 0 or 1 are left untouched.
///
/// # Examples
///
/// ```
/// use slicekit::reverse_in_place;
///
/// let mut data = [1, 2, 3, 4, 5];
/// reverse_in_place(&mut data);
/// assert_eq!(data, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse_in_place<T>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    let (mut left, mut right) = (0, data.len() - 1);
    while left < right {
        data.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Returns `true` if the slice reads the same forwards and backwards.
///
/// Comparison is exact element equality; the scan stops at the first
/// mismatched pair. Empty and single-element slices are palindromes.
///
/// # Examples
///
/// ```
/// use slicekit::is_palindrome;
///
/// assert!(is_palindrome(b"racecar"));
/// assert!(!is_palindrome(b"hello"));
/// assert!(is_palindrome::<u8>(&[]));
/// ```
pub fn is_palindrome<T: PartialEq>(data: &[T]) -> bool {
    if data.len() < 2 {
        return true;
    }

    let (mut left, mut right) = (0, data.len() - 1);
    while left < right {
        if data[left] != data[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Returns `true` if the string reads the same forwards and backwards, by `char`.
///
/// Case-sensitive, with no whitespace or punctuation folding: `"Racecar"` is
/// not a palindrome. Walks the string from both ends without allocating, so
/// multi-byte characters compare as whole code points.
///
/// ```
/// use slicekit::is_palindrome_str;
///
/// assert!(is_palindrome_str("racecar"));
/// assert!(is_palindrome_str("été"));
/// assert!(!is_palindrome_str("Racecar"));
/// assert!(is_palindrome_str(""));
/// ```
pub fn is_palindrome_str(s: &str) -> bool {
    let mut chars = s.chars();
    // next() and next_back() share one iterator, so they stop once they meet.
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}
