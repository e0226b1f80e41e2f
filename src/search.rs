//! Binary search over already sorted slices: exact lookup over an inclusive
//! sub-range, and the insertion point query backing the binary-search
//! insertion sort.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// Rejected binary search call: the inclusive range `[from, to]` is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid search range: from ({}) must not exceed to ({})",
            self.from, self.to
        )
    }
}

impl Error for InvalidRange {}

/// Iterative binary search for `item` in the inclusive range `[from, to]` of
/// the ascending slice `v`.
///
/// Returns `Ok(Some(idx))` with `v[idx] == item` if present, `Ok(None)` if
/// absent and `Err(InvalidRange)` if `to < from`. Which index is returned for
/// repeated equal elements is unspecified. `v` being sorted and the range
/// lying inside it are the caller's responsibility, a range past the end
/// panics like any slice index.
pub fn binary_search<T: Ord>(
    v: &[T],
    item: &T,
    from: usize,
    to: usize,
) -> Result<Option<usize>, InvalidRange> {
    if to < from {
        return Err(InvalidRange { from, to });
    }

    let mut left = from;
    // Exclusive upper bound, sidesteps the `mid - 1` underflow at the left
    // edge of the range.
    let mut right = to + 1;

    while left < right {
        let mid = left + (right - left) / 2;

        match item.cmp(&v[mid]) {
            Ordering::Less => right = mid,
            Ordering::Greater => left = mid + 1,
            Ordering::Equal => return Ok(Some(mid)),
        }
    }

    Ok(None)
}

/// Returns the index at which `item` would have to be inserted into the
/// ascending slice `v` to keep it ascending: the slot of the first element
/// strictly greater than `item`, or `v.len()` if there is none.
///
/// Ties break toward the left, so inserting after existing equal elements.
/// The binary insertion sort depends on exactly this tie-break for its
/// stability.
pub fn insertion_point<T: Ord>(v: &[T], item: &T) -> usize {
    // Appending is the common case on nearly sorted input.
    match v.last() {
        None => return 0,
        Some(last) if last <= item => return v.len(),
        _ => {}
    }

    let mut left = 0;
    let mut right = v.len();

    while left < right {
        let mid = left + (right - left) / 2;

        if v[mid] <= *item {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}
