//! Ordering checks for search preconditions.
//!
//! These are O(n) and are never called on the release search path. Callers
//! that accept untrusted input (e.g. scenario files) run them up front.

use std::cmp::Ordering;

/// First index `i` with `sequence[i] < sequence[i - 1]`, or `None` if sorted.
#[must_use]
pub fn first_inversion<T: Ord>(sequence: &[T]) -> Option<usize> {
    first_inversion_by(sequence, Ord::cmp)
}

/// [`first_inversion`] under an arbitrary comparator.
pub fn first_inversion_by<T, F>(sequence: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sequence
        .windows(2)
        .position(|pair| cmp(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|i| i + 1)
}

/// True if `sequence` is sorted in non-decreasing order.
#[must_use]
pub fn is_sorted<T: Ord>(sequence: &[T]) -> bool {
    first_inversion(sequence).is_none()
}

/// True if `cmp` maps `sequence` to a run of `Less`, then `Equal`, then
/// `Greater` (any run may be empty).
pub fn is_partitioned_by<T, F>(sequence: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    let mut previous = Ordering::Less;
    for element in sequence {
        let current = cmp(element);
        if current < previous {
            return false;
        }
        previous = current;
    }
    true
}
