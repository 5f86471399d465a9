//! Halving interval search over a sorted slice.
//!
//! All public entry points funnel into one loop, [`bisect`], so the plain,
//! keyed, comparator and traced variants can never disagree about which
//! index they report.
//!
//! # Precondition
//!
//! The slice must be sorted (non-decreasing) under the same ordering the
//! search uses. This is not checked in release builds; an unsorted slice
//! yields an unspecified `SearchResult`. Debug builds assert it.

use std::cmp::Ordering;

/// Outcome of a search.
///
/// Absence is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// Some index whose element compares equal to the target. Among
    /// duplicates, which one is reported depends on the probe path only.
    Found(usize),
    NotFound,
}

impl SearchResult {
    /// The matching index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<SearchResult> for Option<usize> {
    fn from(result: SearchResult) -> Self {
        result.index()
    }
}

/// One comparison made by the search loop.
///
/// `ordering` is how `sequence[mid]` compares to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Probe {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub ordering: Ordering,
}

/// The search loop. `cmp` orders an element relative to the target;
/// `on_probe` observes every comparison in order.
///
/// Invariant on entry to each iteration: every index holding an equal
/// element lies in `[low, high]`.
pub(crate) fn bisect<T, F, P>(sequence: &[T], mut cmp: F, mut on_probe: P) -> SearchResult
where
    F: FnMut(&T) -> Ordering,
    P: FnMut(Probe),
{
    let Some(mut high) = sequence.len().checked_sub(1) else {
        return SearchResult::NotFound;
    };
    let mut low = 0;

    while low <= high {
        let mid = low + (high - low) / 2;
        let ordering = cmp(&sequence[mid]);
        on_probe(Probe {
            low,
            high,
            mid,
            ordering,
        });
        match ordering {
            Ordering::Equal => return SearchResult::Found(mid),
            Ordering::Greater => {
                // mid == 0 leaves nothing below it.
                let Some(next) = mid.checked_sub(1) else {
                    break;
                };
                high = next;
            }
            Ordering::Less => low = mid + 1,
        }
    }

    SearchResult::NotFound
}

/// Locate `target` in a slice sorted in non-decreasing order.
///
/// Runs in at most `floor(log2(n)) + 1` comparisons and never fails.
///
/// ```
/// use bisect_search::search::{search, SearchResult};
///
/// let s = [2, 10, 23, 44, 100, 121];
/// assert_eq!(search(&s, &44), SearchResult::Found(3));
/// assert_eq!(search(&s, &3), SearchResult::NotFound);
/// ```
///
/// # Panics
///
/// In debug builds only, panics if `sequence` is not sorted.
#[must_use]
pub fn search<T: Ord>(sequence: &[T], target: &T) -> SearchResult {
    debug_assert!(
        crate::order::is_sorted(sequence),
        "search precondition violated: sequence is not sorted"
    );
    bisect(sequence, |element| element.cmp(target), |_| {})
}

/// Search with a comparator that orders each element relative to an
/// implicit target (`Less` means the element sorts before the target).
///
/// The slice must be partitioned by `cmp`: all `Less`, then all `Equal`,
/// then all `Greater`.
///
/// # Panics
///
/// In debug builds only, panics if `sequence` is not partitioned by `cmp`.
#[must_use]
pub fn search_by<T, F>(sequence: &[T], mut cmp: F) -> SearchResult
where
    F: FnMut(&T) -> Ordering,
{
    debug_assert!(
        crate::order::is_partitioned_by(sequence, &mut cmp),
        "search precondition violated: sequence is not partitioned by comparator"
    );
    bisect(sequence, cmp, |_| {})
}

/// Search for `key` among the keys that `f` extracts from each element.
///
/// # Panics
///
/// In debug builds only, panics if the extracted keys are not sorted.
#[must_use]
pub fn search_by_key<T, K, F>(sequence: &[T], key: &K, mut f: F) -> SearchResult
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    search_by(sequence, |element| f(element).cmp(key))
}
