//! Insertion sort, binary-search variant. Finds the insertion slot in the
//! sorted prefix with [`crate::search::insertion_point`] and rotates the
//! element into place.
//!
//! Stable (the probe breaks ties toward the left), in-place, adaptive: the
//! already-in-place check skips sorted runs entirely.

use crate::search;

sort_impl!("insertion_sort_binary_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    insertion_sort(v);
}

// --- IMPL ---

fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        if v[i] >= v[i - 1] {
            continue;
        }

        let dest = search::insertion_point(&v[..i], &v[i]);

        // Moves v[i] into the destination slot and the elements in
        // [dest, i) one slot right, preserving their order.
        v[dest..=i].rotate_right(1);
    }
}
