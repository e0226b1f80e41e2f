//! Top-down recursive merge sort, published at:
//! <https://en.wikipedia.org/wiki/Merge_sort>
//!
//! Stable, *O*(*n* \* log(*n*)) worst-case. In place from the caller's
//! perspective, each merge step owns a scratch copy of the range it merges
//! and drops it before returning.

sort_impl!("merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(v);
}

// --- IMPL ---

fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    // First index of the right half, matching a split at (left + right) / 2
    // over inclusive bounds.
    let mid = (v.len() - 1) / 2 + 1;

    merge_sort(&mut v[..mid]);
    merge_sort(&mut v[mid..]);

    merge(v, mid);
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]`. The scratch buffer is
/// scoped to this call, the caller-visible slice never observes partial
/// buffer state.
fn merge<T: Ord + Clone>(v: &mut [T], mid: usize) {
    let scratch = v.to_vec();
    let (left, right) = scratch.split_at(mid);

    let mut i = 0;
    let mut j = 0;

    for slot in v.iter_mut() {
        // Taking from the left on equal values is what keeps the merge
        // stable. Once one side is exhausted the other is flushed in order.
        if j == right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
