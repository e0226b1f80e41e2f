//! Insertion sort, shift-based variant. Holds the element to insert aside,
//! shifts the greater part of the sorted prefix one slot right and drops the
//! held value into the gap. Same result as the swap-based variant with fewer
//! writes.
//!
//! Stable, in-place, adaptive.

sort_impl!("insertion_sort_shift_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    insertion_sort(v);
}

// --- IMPL ---

fn insertion_sort<T: Ord + Clone>(v: &mut [T]) {
    for i in 1..v.len() {
        let item = v[i].clone();

        // Scan the sorted prefix right-to-left, moving every element
        // strictly greater than `item` one slot right. The vacated slot is
        // where `item` belongs.
        let mut j = i;
        while j > 0 && v[j - 1] > item {
            v[j] = v[j - 1].clone();
            j -= 1;
        }

        v[j] = item;
    }
}
