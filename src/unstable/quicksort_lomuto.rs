//! Recursive quicksort using the Lomuto partition scheme with the last
//! element as pivot, published at:
//! <https://en.wikipedia.org/wiki/Quicksort#Lomuto_partition_scheme>
//!
//! Unstable and in-place. Picking the last element as pivot degrades to the
//! worst-case *O*(*n*^2) partition split on already sorted and reverse sorted
//! input.

sort_impl!("quicksort_lomuto_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    quicksort(v);
}

// --- IMPL ---

fn quicksort<T: Ord>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let pivot_idx = partition(v);

    // The pivot slot is final, exclude it from both recursive calls.
    let (left, right) = v.split_at_mut(pivot_idx);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// Moves everything smaller than the last element in front of it, swaps the
/// pivot into the gap and returns its final index.
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let last = v.len() - 1;

    // Marks the slot for the next value found to be smaller than the pivot,
    // which is what makes this scheme unstable.
    let mut store = 0;

    for i in 0..last {
        if v[i] < v[last] {
            v.swap(i, store);
            store += 1;
        }
    }

    // Everything in [store, last) is >= the pivot, so after this swap the
    // pivot is in its final position.
    v.swap(store, last);

    store
}
