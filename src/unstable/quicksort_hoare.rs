//! Recursive quicksort using the Hoare partition scheme with the middle
//! element as pivot, published at:
//! <https://en.wikipedia.org/wiki/Quicksort#Hoare_partition_scheme>
//!
//! Unstable, in-place apart from the pivot snapshot, *O*(*n* \* log(*n*))
//! average and *O*(*n*^2) worst-case comparisons.

sort_impl!("quicksort_hoare_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    quicksort(v);
}

// --- IMPL ---

fn quicksort<T: Ord + Clone>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let split = partition(v);

    // Unlike Lomuto the split slot is not final, it stays part of the left
    // side. `split < len - 1` always holds, so both sides shrink.
    let (left, right) = v.split_at_mut(split + 1);
    quicksort(left);
    quicksort(right);
}

/// Partitions `v` around a snapshot of its middle value. Returns the last
/// index of the lesser-or-equal side.
///
/// Cursor bounds: on the first round each scan stops at the pivot slot at the
/// latest, and after a swap `v[i - 1] <= pivot <= v[j + 1]` bounds the next
/// round, so neither cursor can leave the slice. Textbook formulations let
/// the cursors transiently step past the range and lean on the same
/// invariant; here any violation panics instead of reading out of bounds.
fn partition<T: Ord + Clone>(v: &mut [T]) -> usize {
    let pivot = v[(v.len() - 1) / 2].clone();

    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        while v[i] < pivot {
            i += 1;
        }

        while v[j] > pivot {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}
